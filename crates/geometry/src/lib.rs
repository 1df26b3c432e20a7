//! Geometry and units state for wind radiative transfer
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod disk;
mod error;
mod geo;
mod modes;
mod spectype;

pub mod consts;

#[doc(inline)]
pub use geo::Geometry;

#[doc(inline)]
pub use modes::Modes;

#[doc(inline)]
pub use spectype::{DiskType, IonizationMode, LineMode, RunType, SpecType};

#[doc(inline)]
pub use disk::{read_disk_profile, DiskProfile};

#[doc(inline)]
pub use error::{Error, Result};
