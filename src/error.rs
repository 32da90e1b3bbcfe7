//! Error types for termtext configuration.
//!
//! Text operations never fail; only parsing configuration can.

use std::fmt;

/// Result type alias for termtext configuration.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for termtext configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Tab width that is not a positive integer.
    InvalidTabWidth(String),
    /// Malformed width-override entry.
    InvalidOverride(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTabWidth(s) => write!(f, "invalid tab width: {s:?}"),
            Self::InvalidOverride(s) => write!(f, "invalid width override: {s:?}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidTabWidth("zero".to_string());
        assert_eq!(err.to_string(), "invalid tab width: \"zero\"");

        let err = Error::InvalidOverride("x=".to_string());
        assert!(err.to_string().contains("invalid width override"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Error::InvalidTabWidth("-1".into()));
        assert!(err.source().is_none());
    }
}
