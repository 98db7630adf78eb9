use bootsy::config::{Config, EnvironmentSpec};
use bootsy::error::Error;
use bootsy::materializer::{
    create_directories, create_files, materialize, resolve_entry, EntryKind, Outcome,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn spec(dirs: &[&str], files: &[&str]) -> EnvironmentSpec {
    EnvironmentSpec::new(strings(dirs), strings(files))
}

#[test]
fn test_resolve_entry() {
    assert_eq!(resolve_entry("/t", "src/lib"), Some(PathBuf::from("/t/src/lib")));
    assert_eq!(resolve_entry("/t", "./src"), Some(PathBuf::from("/t/src")));
    assert_eq!(resolve_entry("/t", "a/"), Some(PathBuf::from("/t/a")));
    assert_eq!(resolve_entry("/t", ""), None);
    assert_eq!(resolve_entry("/t", "."), None);
    assert_eq!(resolve_entry("/t", "/etc"), None);
    assert_eq!(resolve_entry("/t", "src/../.."), None);
}

#[test_log::test]
fn test_create_directories() {
    let target = TempDir::new().unwrap();
    let reports = create_directories("dev", &spec(&["src", "src/lib"], &[]), target.path());

    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.outcome.is_created()));
    assert!(target.path().join("src/lib").is_dir());
}

#[test_log::test]
fn test_create_directories_is_idempotent() {
    let target = TempDir::new().unwrap();
    let spec = spec(&["src"], &[]);
    create_directories("dev", &spec, target.path());

    let reports = create_directories("dev", &spec, target.path());
    assert!(matches!(reports[0].outcome, Outcome::AlreadyExists));
    assert_eq!(
        reports[0].message("dev").as_deref(),
        Some("[dev] - Directory 'src' already exists.")
    );
}

#[test_log::test]
fn test_missing_parent_does_not_stop_siblings() {
    let target = TempDir::new().unwrap();
    let reports =
        create_directories("dev", &spec(&["missing/child", "after"], &[]), target.path());

    assert!(matches!(reports[0].outcome, Outcome::Unreachable(_)));
    assert!(reports[0]
        .message("dev")
        .unwrap()
        .starts_with("[dev] - Directory 'missing/child' cannot be created:"));
    assert!(reports[1].outcome.is_created());
    assert!(target.path().join("after").is_dir());
    assert!(!target.path().join("missing").exists());
}

#[test_log::test]
fn test_create_files_keeps_existing_content() {
    let target = TempDir::new().unwrap();
    fs::write(target.path().join("README.md"), "hello").unwrap();

    let reports = create_files("dev", &spec(&[], &["README.md", "new.txt"]), target.path());

    assert!(matches!(reports[0].outcome, Outcome::AlreadyExists));
    assert_eq!(reports[0].kind, EntryKind::File);
    assert_eq!(
        reports[0].message("dev").as_deref(),
        Some("[dev] - File 'README.md' already exists.")
    );
    assert_eq!(fs::read_to_string(target.path().join("README.md")).unwrap(), "hello");
    assert!(reports[1].outcome.is_created());
    assert_eq!(fs::metadata(target.path().join("new.txt")).unwrap().len(), 0);
}

#[test_log::test]
fn test_file_without_parent_is_unreachable() {
    let target = TempDir::new().unwrap();
    let reports = create_files("dev", &spec(&[], &["nowhere/x.txt"]), target.path());

    assert!(matches!(reports[0].outcome, Outcome::Unreachable(_)));
    let message = reports[0].message("dev").unwrap();
    assert!(message.starts_with("[dev] - File 'nowhere/x.txt' cannot be created:"));
    assert!(!message.contains("already exists"));
}

#[test_log::test]
fn test_escaping_entry_is_unreachable() {
    let target = TempDir::new().unwrap();
    let inner = target.path().join("inner");
    fs::create_dir(&inner).unwrap();

    let reports = create_directories("dev", &spec(&["../escaped"], &[]), &inner);

    assert!(matches!(reports[0].outcome, Outcome::Unreachable(_)));
    assert!(!target.path().join("escaped").exists());
}

#[test_log::test]
fn test_materialize_creates_directories_before_files() {
    let target = TempDir::new().unwrap();
    let config: Config =
        [("dev".to_string(), spec(&["a"], &["a/x.txt"]))].into_iter().collect();

    let reports = materialize(&config, "dev", target.path()).unwrap();

    assert_eq!(reports[0].kind, EntryKind::Directory);
    assert_eq!(reports[1].kind, EntryKind::File);
    assert!(reports.iter().all(|r| r.outcome.is_created()));
    assert!(target.path().join("a/x.txt").is_file());
}

#[test]
fn test_materialize_unknown_environment() {
    let target = TempDir::new().unwrap();
    let config: Config = [("dev".to_string(), spec(&[], &[]))].into_iter().collect();

    let result = materialize(&config, "prod", target.path());
    match result {
        Err(Error::UnknownEnvironment { env, available }) => {
            assert_eq!(env, "prod");
            assert_eq!(available, "dev");
        }
        other => panic!("Expected UnknownEnvironment, got {:?}", other.map(|r| r.len())),
    }
}

#[test_log::test]
fn test_directory_over_existing_file_is_unreachable() {
    let target = TempDir::new().unwrap();
    fs::write(target.path().join("src"), "not a directory").unwrap();

    let reports = create_directories("dev", &spec(&["src"], &[]), target.path());

    assert!(matches!(reports[0].outcome, Outcome::Unreachable(_)));
    let message = reports[0].message("dev").unwrap();
    assert!(message.starts_with("[dev] - Directory 'src' cannot be created:"));
    assert!(message.contains("is not a directory"));
    assert_eq!(fs::read_to_string(target.path().join("src")).unwrap(), "not a directory");
}

#[test_log::test]
fn test_file_over_existing_directory_is_unreachable() {
    let target = TempDir::new().unwrap();
    fs::create_dir(target.path().join("README.md")).unwrap();

    let reports = create_files("dev", &spec(&[], &["README.md"]), target.path());

    assert!(matches!(reports[0].outcome, Outcome::Unreachable(_)));
    let message = reports[0].message("dev").unwrap();
    assert!(message.starts_with("[dev] - File 'README.md' cannot be created:"));
    assert!(message.contains("is not a file"));
    assert!(target.path().join("README.md").is_dir());
}
