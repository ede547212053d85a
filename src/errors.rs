//! Defines application-specific error types.
//!
//! This module provides the `AppError` enum, which categorizes the errors
//! that can end a run, offering more context than generic I/O or
//! `anyhow` errors. Per-file read failures are deliberately NOT represented
//! here: they are recovered inside the collector and surface as placeholder
//! records in the output instead of as errors.

use thiserror::Error;

/// Application-specific errors used throughout `collect-code`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Generic error related to invalid configuration settings or combinations.
    /// Often used when validation fails after initial parsing.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Error writing the final aggregated output file. This is the only
    /// condition that terminates a run with a non-zero outcome.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        /// The destination path that could not be written.
        path: String, // Use String to avoid lifetime issues if PathBuf is dropped
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },
}

/// Helper function to create an `AppError::OutputWrite` with path context.
pub fn output_write_error<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> AppError {
    AppError::OutputWrite {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    #[test]
    fn test_output_write_error_helper() {
        let path = PathBuf::from("some/test/collected_code.txt");
        let source_error = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let app_error = output_write_error(source_error, &path);

        match app_error {
            AppError::OutputWrite {
                path: error_path,
                source,
            } => {
                // Use contains because canonicalization might affect the exact path string
                assert!(error_path.contains("collected_code.txt"));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            _ => panic!("Expected AppError::OutputWrite"),
        }
    }

    #[test]
    fn test_config_error_display() {
        let err = AppError::ConfigError("at least one root directory is required".to_string());
        assert!(err.to_string().contains("Invalid configuration"));
        assert!(err.to_string().contains("at least one root"));
    }
}
