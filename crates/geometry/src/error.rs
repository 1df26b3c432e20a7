//! Result and Error types for wtools-geometry

/// Type alias for `Result<T, geometry::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `wtools-geometry` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("could not open temperature profile \"{0}\"")]
    ProfileNotFound(String),

    #[error("temperature profile truncated (expected {expected} rings, found {found})")]
    ProfileTruncated { expected: usize, found: usize },

    #[error("unparseable profile record \"{0}\"")]
    BadProfileRecord(String),
}
