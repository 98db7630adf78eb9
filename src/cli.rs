//! Command-line interface implementation for Bootsy.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for Bootsy.
#[derive(Parser, Debug)]
#[command(
    name = "bootsy",
    author,
    version,
    about = "Setup a programming language environment based on a TOML configuration file.",
    long_about = None
)]
pub struct Args {
    /// Pick an environment to setup
    #[arg(value_name = "ENV")]
    pub env: String,

    /// Specify a path to set up the environment. Default is working directory
    #[arg(short, long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Configuration file. Default is $BOOTSY, then ~/.config/.bootsy.toml
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                if let Err(e) = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                {
                    eprintln!("Failed to print help: {}", e);
                }
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
