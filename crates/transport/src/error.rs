//! Result and Error types for wtools-transport

/// Type alias for `Result<T, transport::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `wtools-transport` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    /// Recoverable: the photon is left untouched for the caller to discard
    #[error("photon {np} is not in the wind grid")]
    PhotonNotInGrid { np: usize },

    #[error("too many bad photons generated ({0})")]
    TooManyBadPhotons(usize),
}
