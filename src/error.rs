//! Error types for char_trie

use thiserror::Error;

/// Result type alias for trie operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trie operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A key or pattern argument was rejected by `op`.
    #[error("Illegal argument for {op}: {reason}")]
    InvalidArgument {
        op: &'static str,
        reason: &'static str,
    },

    #[error("Input must be a non-empty list of strings")]
    EmptyInput,

    #[error("Element {index} of the input is empty or not a string")]
    InvalidWord { index: usize },
}

impl Error {
    /// Returns `true` for the hard-failure tier, i.e. a caller passed a bad key.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }
}
