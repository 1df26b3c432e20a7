//! Result and Error types for wtools-grid

use crate::domain::CoordType;

/// Type alias for `Result<T, grid::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `wtools-grid` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("bad edge array")]
    EdgeError(#[from] wtools_utils::Error),

    #[error("could not open wind model \"{0}\"")]
    ModelNotFound(String),

    #[error("no parseable records in wind model")]
    EmptyModel,

    #[error("imported grid dimensions are wrong: {ndim} x {mdim} != {ncell}")]
    DimensionMismatch {
        ndim: usize,
        mdim: usize,
        ncell: usize,
    },

    #[error("model has more cells than the compile-time limit ({limit})")]
    OverCapacity { limit: usize },

    #[error("coordinate system {0} has no fractional-cell support")]
    UnsupportedCoordinates(CoordType),

    #[error("position (r {r:.4e}, theta {theta:.3}) is outside the grid")]
    PositionOutsideGrid { r: f64, theta: f64 },

    #[error("domain {0} does not exist")]
    DomainIndex(usize),

    #[error("bounding box of in-wind cells is degenerate or non-finite")]
    DegenerateBounds,
}
