//! Creation of an environment's directories and files under the target path.
//!
//! Every entry is handled on its own: a conflict or a missing parent is
//! reported and the run moves on to the next entry.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Component, Path, PathBuf};

use log::{debug, error, warn};

use crate::config::{Config, EnvironmentSpec};
use crate::error::{Error, Result};

/// Kind of a declared entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Directory => write!(f, "Directory"),
            EntryKind::File => write!(f, "File"),
        }
    }
}

/// Result of creating a single entry.
#[derive(Debug)]
pub enum Outcome {
    Created,
    AlreadyExists,
    /// The path cannot be built here: missing parent, escaping path, an
    /// existing entry of the other kind, or any other filesystem error.
    Unreachable(io::Error),
}

impl Outcome {
    fn from_io(result: io::Result<()>) -> Self {
        match result {
            Ok(()) => Outcome::Created,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Outcome::AlreadyExists,
            Err(e) => Outcome::Unreachable(e),
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Outcome::Created)
    }
}

/// What happened to one declared entry during materialization.
#[derive(Debug)]
pub struct EntryReport {
    pub kind: EntryKind,
    pub entry: String,
    pub outcome: Outcome,
}

impl EntryReport {
    /// Single-line diagnostic for this entry, `None` when it was created.
    pub fn message(&self, env: &str) -> Option<String> {
        match &self.outcome {
            Outcome::Created => None,
            Outcome::AlreadyExists => {
                Some(format!("[{}] - {} '{}' already exists.", env, self.kind, self.entry))
            }
            Outcome::Unreachable(e) => Some(format!(
                "[{}] - {} '{}' cannot be created: {}.",
                env, self.kind, self.entry, e
            )),
        }
    }
}

/// Joins a declared relative entry to `base`.
///
/// Returns `None` for entries that are empty, absolute, or climb out of `base`
/// with `..`, since the joined path would not be under `base`.
pub fn resolve_entry<P: AsRef<Path>>(base: P, entry: &str) -> Option<PathBuf> {
    let mut resolved = base.as_ref().to_path_buf();
    let mut segments = 0;
    for component in Path::new(entry).components() {
        match component {
            Component::Normal(segment) => {
                resolved.push(segment);
                segments += 1;
            }
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    (segments > 0).then_some(resolved)
}

fn escape_error(entry: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("'{}' is not a relative path inside the target", entry),
    )
}

// An existing entry only counts as already there when it has the declared kind.
fn check_existing(outcome: Outcome, path: &Path, kind: EntryKind) -> Outcome {
    let same_kind = match kind {
        EntryKind::Directory => path.is_dir(),
        EntryKind::File => path.is_file(),
    };
    match outcome {
        Outcome::AlreadyExists if !same_kind => {
            let expected = kind.to_string().to_lowercase();
            Outcome::Unreachable(io::Error::new(
                io::ErrorKind::Other,
                format!("'{}' exists and is not a {}", path.display(), expected),
            ))
        }
        outcome => outcome,
    }
}

/// Creates a single directory level. The parent must already exist.
pub fn create_directory<P: AsRef<Path>>(path: P) -> Outcome {
    let path = path.as_ref();
    check_existing(Outcome::from_io(fs::create_dir(path)), path, EntryKind::Directory)
}

/// Creates an empty file, leaving an existing one untouched.
pub fn create_file<P: AsRef<Path>>(path: P) -> Outcome {
    let path = path.as_ref();
    let created = OpenOptions::new().write(true).create_new(true).open(path).map(|_| ());
    check_existing(Outcome::from_io(created), path, EntryKind::File)
}

fn create_entry(env: &str, kind: EntryKind, entry: &str, target: &Path) -> EntryReport {
    let outcome = match resolve_entry(target, entry) {
        Some(path) => match kind {
            EntryKind::Directory => create_directory(&path),
            EntryKind::File => create_file(&path),
        },
        None => Outcome::Unreachable(escape_error(entry)),
    };

    let report = EntryReport { kind, entry: entry.to_string(), outcome };
    match (&report.outcome, report.message(env)) {
        (Outcome::AlreadyExists, Some(message)) => warn!("{}", message),
        (Outcome::Unreachable(_), Some(message)) => error!("{}", message),
        _ => debug!("[{}] - {} '{}' created.", env, kind, entry),
    }
    report
}

/// Creates every declared directory of `spec` directly under `target`, in order.
pub fn create_directories<P: AsRef<Path>>(
    env: &str,
    spec: &EnvironmentSpec,
    target: P,
) -> Vec<EntryReport> {
    let target = target.as_ref();
    spec.directories()
        .iter()
        .map(|directory| create_entry(env, EntryKind::Directory, directory, target))
        .collect()
}

/// Creates every declared file of `spec` directly under `target`, in order.
pub fn create_files<P: AsRef<Path>>(
    env: &str,
    spec: &EnvironmentSpec,
    target: P,
) -> Vec<EntryReport> {
    let target = target.as_ref();
    spec.files()
        .iter()
        .map(|file| create_entry(env, EntryKind::File, file, target))
        .collect()
}

/// Materializes environment `env` of `config` under `target`.
///
/// Directories are all processed before files so that files may live in
/// directories created by the same run.
///
/// # Errors
/// * `Error::UnknownEnvironment` if `env` is not declared in `config`
pub fn materialize<P: AsRef<Path>>(
    config: &Config,
    env: &str,
    target: P,
) -> Result<Vec<EntryReport>> {
    let spec = config.get(env).ok_or_else(|| Error::UnknownEnvironment {
        env: env.to_string(),
        available: config.names().collect::<Vec<_>>().join(", "),
    })?;
    let target = target.as_ref();

    debug!("Setting up environment '{}' in {}", env, target.display());

    let mut reports = create_directories(env, spec, target);
    reports.extend(create_files(env, spec, target));
    Ok(reports)
}
