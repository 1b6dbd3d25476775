//! Error types for address validation.

/// Result type alias for address operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Address error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input is not a syntactically valid email address.
    #[error("Invalid email address: {0:?}")]
    InvalidAddress(String),
}

impl Error {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidAddress(input) => input,
        }
    }
}
