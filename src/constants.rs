//! Common constants used throughout the Bootsy application.

/// Environment variable pointing to an alternative configuration file
pub const CONFIG_ENV_VAR: &str = "BOOTSY";

/// Configuration file name looked up under `~/.config` when `BOOTSY` is unset
pub const DEFAULT_CONFIG_FILE: &str = ".bootsy.toml";

/// Key listing the directories of an environment
pub const DIRS_KEY: &str = "dirs";

/// Key listing the files of an environment
pub const FILES_KEY: &str = "files";

/// Prefix of every log line
pub const LOG_PREFIX: &str = "[BOOTSY]";
