//! Integration tests for caller-relative access
//!
//! The calls are made from `fixtures/demo/src/lookup.rs`, which sits inside
//! a project with its own `pyproject.toml`.

#[path = "fixtures/demo/src/lookup.rs"]
mod lookup;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn demo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/demo")
}

fn same_file(a: &Path, b: &Path) -> bool {
    fs::canonicalize(a).unwrap() == fs::canonicalize(b).unwrap()
}

#[test]
fn test_current_finds_demo_project() {
    let paths = lookup::registry().unwrap();

    assert!(same_file(
        paths.config_path().as_path(),
        &demo_root().join("pyproject.toml")
    ));
    assert_eq!(paths.len(), 3);
    assert_eq!(
        paths.names(),
        ["absolute", "data", "tests"]
            .into_iter()
            .collect::<std::collections::BTreeSet<_>>()
    );
}

#[test]
fn test_relative_entries_resolve_against_project() {
    let paths = lookup::registry().unwrap();
    let root = paths.project_root();

    assert_eq!(paths.get("tests").unwrap().as_path(), root.as_path().join("tests"));
    assert_eq!(paths.get("data").unwrap().as_path(), root.as_path().join("data/raw"));
}

#[cfg(unix)]
#[test]
fn test_absolute_entry_is_verbatim() {
    let paths = lookup::registry().unwrap();
    assert_eq!(paths.get("absolute").unwrap().as_path(), Path::new("/opt/demo"));
}

#[test]
fn test_unknown_name() {
    let paths = lookup::registry().unwrap();
    let err = paths.get("does_not_exist").unwrap_err();

    assert!(err.is_unknown_path());
    assert!(err.to_string().contains("does_not_exist"));
}

#[test]
fn test_macro_matches_track_caller() {
    let from_fn = lookup::registry().unwrap();
    let from_macro = lookup::registry_from_macro().unwrap();

    assert_eq!(from_fn.names(), from_macro.names());
    assert!(same_file(
        from_fn.config_path().as_path(),
        from_macro.config_path().as_path()
    ));
}

#[test]
fn test_project_root() {
    let root = lookup::root().unwrap();
    assert!(same_file(root.as_path(), &demo_root()));
}

#[test]
fn test_cached_accessor() {
    let first = lookup::cached().unwrap();
    let second = lookup::cached().unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let removed = project_paths::invalidate_cached(first.config_path().as_path());
    assert!(removed >= 1);

    let rebuilt = lookup::cached().unwrap();
    assert!(!Arc::ptr_eq(&first, &rebuilt));
    assert_eq!(*first, *rebuilt);
}
