//! Bootsy's main application entry point and orchestration logic.
//! Handles command-line argument parsing, configuration checks,
//! and the creation of the selected environment.

use std::path::PathBuf;

use bootsy::{
    cli::{get_args, Args},
    config::{default_config_path, load_config},
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    materializer::materialize,
    validator::is_config_compliant,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the configuration file
/// 2. Checks that the selected environment is declared
/// 3. Validates the whole configuration, aborting before any creation if it fails
/// 4. Creates the environment's directories, then its files
fn run(args: Args) -> Result<()> {
    let config_path = args.config.unwrap_or_else(default_config_path);
    let config = load_config(&config_path)?;

    if config.get(&args.env).is_none() {
        return Err(Error::UnknownEnvironment {
            env: args.env,
            available: config.names().collect::<Vec<_>>().join(", "),
        });
    }

    if !is_config_compliant(&config) {
        return Err(Error::NonCompliantConfig);
    }

    let target = match args.path {
        Some(path) => path,
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    materialize(&config, &args.env, &target)?;
    Ok(())
}
