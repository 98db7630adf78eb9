use std::io::Write;

use crate::constants::LOG_PREFIX;

/// Installs the global logger. Warnings and errors are always shown,
/// `verbose` adds debug output for every created entry.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .format(|buf, record| writeln!(buf, "{} {}", LOG_PREFIX, record.args()))
        .init();
}
