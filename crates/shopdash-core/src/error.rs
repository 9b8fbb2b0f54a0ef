//! Error types for the `shopdash` service

use std::{error::Error as StdError, fmt};

/// Main error type for the dashboard service
#[derive(Debug)]
pub enum Error {
    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// Validation error
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Database error
    Database(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::Validation { field, message } => {
                write!(f, "Validation error: {field} - {message}")
            }
            Self::Database(msg) => write!(f, "Database error: {msg}"),
        }
    }
}

impl StdError for Error {}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<&str> = errors.errors().keys().map(|key| &**key).collect();
        fields.sort_unstable();

        Self::Validation {
            field: fields.join(", "),
            message: errors.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::uninlined_format_args)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use validator::Validate;

    #[test]
    fn test_validation_errors_conversion() {
        #[derive(Validate)]
        struct ServerSettings {
            #[validate(range(min = 1))]
            port: u16,
        }

        let errors = ServerSettings { port: 0 }.validate().unwrap_err();
        let app_error = Error::from(errors);

        match app_error {
            Error::Validation { ref field, .. } => assert_eq!(field, "port"),
            _ => panic!("Expected Validation error variant"),
        }
        assert!(app_error.source().is_none());
    }

    #[test]
    fn test_all_error_display_variants() {
        let test_cases = vec![
            (
                Error::Configuration {
                    message: "missing url".to_string(),
                },
                "Configuration error: missing url",
            ),
            (
                Error::Validation {
                    field: "server.port".to_string(),
                    message: "must be positive".to_string(),
                },
                "Validation error: server.port - must be positive",
            ),
            (
                Error::Database("connection refused".to_string()),
                "Database error: connection refused",
            ),
        ];

        for (error, expected) in test_cases {
            let display = format!("{}", error);
            assert!(
                display.contains(expected),
                "Error display '{}' should contain '{}'",
                display,
                expected
            );
        }
    }
}
