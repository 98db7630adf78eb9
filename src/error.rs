//! Error handling for the Bootsy application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for Bootsy operations.
///
/// Per-entry materialization problems are not errors: they are reported as
/// [`crate::materializer::Outcome`] values and never abort a run.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The configuration file could not be found
    #[error(
        "[CONFIG] File '{path}' not found. If you located the file elsewhere indicate it in BOOTSY environment variable."
    )]
    ConfigNotFound { path: String },

    /// Represents errors that occur during configuration parsing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// The selected environment is not declared in the configuration
    #[error("Unknown environment '{env}' (choose from: {available}).")]
    UnknownEnvironment { env: String, available: String },

    /// The configuration failed the required keys or path feasibility checks
    #[error("Configuration is not compliant, nothing was created.")]
    NonCompliantConfig,
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
