//! Error types for `posmatrix`.
//!
//! Every failure in this crate is a local, deterministic validation failure:
//! nothing here is transient and nothing should be retried.

use thiserror::Error;

/// Result type alias for `posmatrix` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in `posmatrix` operations.
///
/// Error codes follow the pattern `PMX-XXX`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input symbol outside the closed alphabet (PMX-001).
    #[error("[PMX-001] Invalid character {0:?}")]
    InvalidCharacter(char),

    /// Input sequence empty or longer than the configured depth (PMX-002).
    #[error("[PMX-002] Invalid length {length}: expected 1..={max}")]
    InvalidLength {
        /// Length of the rejected input.
        length: usize,
        /// Maximum length accepted by the store.
        max: usize,
    },

    /// Symbol index outside `0..len` (PMX-003).
    #[error("[PMX-003] Index {index} out of range for alphabet of {len} symbols")]
    IndexOutOfRange {
        /// Rejected index.
        index: usize,
        /// Alphabet size.
        len: usize,
    },

    /// Configuration error (PMX-004).
    #[error("[PMX-004] Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the error code (e.g., "PMX-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidCharacter(_) => "PMX-001",
            Self::InvalidLength { .. } => "PMX-002",
            Self::IndexOutOfRange { .. } => "PMX-003",
            Self::Config(_) => "PMX-004",
        }
    }

    /// Returns true if the error was caused by caller-supplied input.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        !matches!(self, Self::Config(_))
    }
}

impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
