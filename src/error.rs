//! Crate-wide error and result types.
//!
//! Every fallible operation in this crate reports through [`Error`].
//! Validation is fail-fast: nothing is generated, and nothing is
//! partially emitted, once a violation is detected.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by generation, sampling, and validation.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A parameter had the right type but an unacceptable value,
    /// such as a non-positive entropy target or an inverted range.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// An operation that requires a non-empty collection received an
    /// empty one.
    #[error("cannot choose from empty {0}")]
    EmptyInput(&'static str),

    /// The operating system randomness source failed to produce bytes.
    #[error("randomness source failure: {0}")]
    Source(String),

    /// A file or other external resource could not be read or written.
    #[error("resource error: {0}")]
    Resource(String),

    /// The system entropy pool is below the required minimum.
    ///
    /// Fatal by default; callers may downgrade it to a warning with
    /// an explicit override.
    #[error("system entropy too low: {0} bits available, {1} bits required")]
    InsecureEnvironment(u64, u64),
}

impl Error {
    /// Shorthand for an [`Error::InvalidValue`] with a formatted message.
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidValue(msg.into())
    }
}
