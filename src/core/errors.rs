//! Shared error types for the application
//!
//! Note that an unresolvable speaker count is *not* an error here: it is the
//! `Error`/`Unclassified` category on the record. These types cover the shell
//! around the engine (configuration files and their validation).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for speakermap operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// TOML errors
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// A categorical provenance or vitality value outside its domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {field} value '{value}'")]
pub struct ParseCategoricalError {
    pub field: &'static str,
    pub value: String,
}

impl ParseCategoricalError {
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Internal classifier failure. Never escapes `classify`; it is folded into
/// the `Error` category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("numeric token '{0}' is out of range")]
    NumberOutOfRange(String),

    #[error("numeric token '{0}' is not a valid number")]
    InvalidNumber(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_system_error_keeps_io_source() {
        let err = Error::FileSystem {
            message: "Failed to read config file".into(),
            path: Some(PathBuf::from("custom.toml")),
            source: Some(std::io::Error::from(std::io::ErrorKind::NotFound)),
        };
        assert_eq!(err.to_string(), "File system error: Failed to read config file");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_parse_categorical_error_display() {
        let err = ParseCategoricalError::new("source_type", "automated");
        assert_eq!(err.to_string(), "unrecognized source_type value 'automated'");
    }
}
