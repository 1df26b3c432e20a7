//! Wind grid construction and spatial queries
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod cell;
mod domain;
mod error;
mod model;
mod wind;

pub mod reader;

// inline the important types for a nice public API
#[doc(inline)]
pub use reader::read_rtheta_model;

#[doc(inline)]
pub use model::{ImportedModel, ModelCell, DEFAULT_IMPORT_TEMPERATURE, NDIM_MAX2D};

#[doc(inline)]
pub use cell::{InWind, WindCell};

#[doc(inline)]
pub use domain::{Cone, CoordType, Domain, Weights};

#[doc(inline)]
pub use wind::Wind;

#[doc(inline)]
pub use error::{Error, Result};
