//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `CoreError` to exit codes and user-facing messages.

use shelter_core::{CoreError, PathError, RepositoryError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input (arguments or imported data).
    #[error("Invalid input: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error (data paths could not be resolved).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Database(_) => 73, // EX_CANTCREAT (closest fit)
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            // An unknown breed or duplicate is a problem with what the user asked for.
            CoreError::Repository(
                e @ (RepositoryError::NotFound(_) | RepositoryError::AlreadyExists(_)),
            ) => Self::Arguments(e.to_string()),
            CoreError::Repository(repo_err) => Self::Database(repo_err.to_string()),
            CoreError::InvalidAttribute(invalid) => Self::Arguments(invalid.to_string()),
            CoreError::Validation(msg) => Self::Arguments(msg),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelter_core::DogValidationError;

    #[test]
    fn test_invalid_attribute_is_usage_error() {
        let err = CliError::from(CoreError::from(DogValidationError::NameTooShort(1)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_storage_failure_is_database_error() {
        let err = CliError::from(CoreError::from(RepositoryError::Storage("locked".into())));
        assert!(matches!(err, CliError::Database(_)));
        assert_eq!(err.exit_code(), 73);
    }

    #[test]
    fn test_path_error_is_config_error() {
        let err = CliError::from(PathError::NoDataDir);
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_unknown_breed_is_usage_error() {
        let err = CliError::from(CoreError::from(RepositoryError::NotFound(
            "Breed 'Dragon'".into(),
        )));
        assert!(matches!(err, CliError::Arguments(_)));
    }
}
