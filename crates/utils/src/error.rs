//! Result and Error types for the utils module

/// Type alias for `Result<T, utils::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `wtools_utils`
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    /// An empty slice where at least one value was expected
    #[error("slice contains no values")]
    EmptySlice,

    /// The slice contains NAN or infinite values
    #[error("slice contains non-finite values")]
    NonFiniteValues,

    /// Edge arrays must be strictly increasing to be searchable
    #[error("edge array is not strictly increasing at index {0}")]
    NotMonotonic(usize),
}
