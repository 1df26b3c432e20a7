//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! Monotonic edge-array scans and finiteness-checked extrema are used by the
//! grid crates everywhere; the scientific formatting keeps log output
//! consistent between the cycle summaries and the diagnostic files.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod edge_ext;
mod error;
mod value_ext;

// Flatten
pub use edge_ext::EdgeExt;
pub use error::{Error, Result};
pub use value_ext::ValueExt;
