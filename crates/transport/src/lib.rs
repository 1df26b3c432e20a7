//! Photon transport bookkeeping
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod checks;
mod disk;
mod error;
mod matom;
mod photon;
mod reposition;

#[doc(inline)]
pub use photon::{Photon, ScatterKind};

#[doc(inline)]
pub use reposition::{reposition, reposition_lost_disk_photon};

#[doc(inline)]
pub use checks::{photon_checks, MAX_BAD_PHOTONS};

#[doc(inline)]
pub use matom::{matom_emiss_report, EmissReport, MacroCounters};

#[doc(inline)]
pub use disk::{zdisk, DiskRings};

#[doc(inline)]
pub use error::{Error, Result};
