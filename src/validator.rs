//! Checks run on the whole configuration before anything is created.
//!
//! Both checks always run to completion so that every problem is reported in
//! one pass. The real target directory is never touched here.

use std::path::Path;

use log::{debug, error};
use tempfile::TempDir;

use crate::config::Config;
use crate::constants::{DIRS_KEY, FILES_KEY};
use crate::materializer::{create_directory, create_file, resolve_entry, EntryKind, Outcome};

/// Compliance verdict with one diagnostic per violation, in detection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    diagnostics: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_compliant(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    pub fn push(&mut self, diagnostic: String) {
        self.diagnostics.push(diagnostic);
    }

    pub fn merge(mut self, other: ValidationResult) -> Self {
        self.diagnostics.extend(other.diagnostics);
        self
    }

    /// Logs every diagnostic at error level.
    pub fn report(&self) {
        for diagnostic in &self.diagnostics {
            error!("{}", diagnostic);
        }
    }
}

/// Checks that every environment declares both the `dirs` and `files` keys.
pub fn check_required_keys(config: &Config) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (env, spec) in config.environments() {
        if spec.directories.is_none() {
            result.push(format!("[{}] - Key '{}' is required but missing.", env, DIRS_KEY));
        }
        if spec.files.is_none() {
            result.push(format!("[{}] - Key '{}' is required but missing.", env, FILES_KEY));
        }
    }

    result
}

fn infeasible(env: &str, kind: EntryKind, entry: &str) -> String {
    format!("[{}] - {} '{}' cannot be created. Path may not exist.", env, kind, entry)
}

/// Creates every declared entry inside a scratch directory to find the ones
/// that cannot be built. Each environment gets its own scratch directory,
/// removed when it goes out of scope.
pub fn check_path_feasibility(config: &Config) -> ValidationResult {
    check_path_feasibility_in(config, std::env::temp_dir())
}

/// Same as [`check_path_feasibility`], with scratch directories created under `root`.
///
/// A scratch directory that cannot be created is reported for its
/// environment and the remaining environments are still checked.
pub fn check_path_feasibility_in<P: AsRef<Path>>(config: &Config, root: P) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (env, spec) in config.environments() {
        let scratch = match TempDir::new_in(root.as_ref()) {
            Ok(scratch) => scratch,
            Err(e) => {
                result.push(format!("[{}] - Scratch area cannot be created: {}.", env, e));
                continue;
            }
        };
        debug!("[{}] - Checking paths in {}", env, scratch.path().display());

        for directory in spec.directories() {
            let feasible = resolve_entry(scratch.path(), directory)
                .map(|path| create_directory(path).is_created())
                .unwrap_or(false);
            if !feasible {
                result.push(infeasible(env, EntryKind::Directory, directory));
            }
        }

        for file in spec.files() {
            let feasible = resolve_entry(scratch.path(), file)
                .map(|path| !matches!(create_file(path), Outcome::Unreachable(_)))
                .unwrap_or(false);
            if !feasible {
                result.push(infeasible(env, EntryKind::File, file));
            }
        }
    }

    result
}

/// Runs both checks without short-circuiting and merges their diagnostics.
pub fn validate(config: &Config) -> ValidationResult {
    check_required_keys(config).merge(check_path_feasibility(config))
}

/// Reports every diagnostic and tells whether the configuration can be acted on.
pub fn is_config_compliant(config: &Config) -> bool {
    let result = validate(config);
    result.report();
    result.is_compliant()
}
