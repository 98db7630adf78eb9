//! Bootsy sets up a project environment: it creates the directories and files
//! an environment of its configuration declares, after checking that the whole
//! configuration is sound.

/// Command-line interface module for the Bootsy application
pub mod cli;

/// Configuration model and loading
/// Supports TOML, JSON and YAML formats
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the Bootsy application
pub mod error;

/// Logger setup
pub mod logger;

/// Creation of directories and files under the target path
pub mod materializer;

/// Required keys and path feasibility checks
pub mod validator;
