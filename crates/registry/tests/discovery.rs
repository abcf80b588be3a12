//! Integration tests for discovery with explicit caller locations

use project_paths::{CallerLocation, Error, Registry, Settings};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// Layout mirrors a small Python project: proj/pyproject.toml, proj/src/mod.py
fn create_project(pyproject: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let proj = temp_dir.path().join("proj");
    fs::create_dir_all(proj.join("src")).unwrap();
    fs::write(proj.join("pyproject.toml"), pyproject).unwrap();
    fs::write(proj.join("src/mod.py"), "import project_paths\n").unwrap();
    temp_dir
}

#[cfg(unix)]
#[test]
fn test_caller_in_src_resolves_project_paths() {
    let temp_dir = create_project("[tool.project-paths]\ntests = \"tests/\"\nabs = \"/opt/x\"\n");
    let proj = temp_dir.path().join("proj");

    let caller = CallerLocation::new(proj.join("src/mod.py"));
    let paths = project_paths::for_caller(&caller, &Settings::default()).unwrap();

    assert_eq!(paths.get("tests").unwrap().as_path(), proj.join("tests"));
    assert_eq!(paths.get("abs").unwrap().as_path(), Path::new("/opt/x"));
    assert_eq!(paths.len(), 2);
}

#[test]
fn test_missing_table_names_config_file() {
    let temp_dir = create_project("[project]\nname = \"proj\"\n");
    let proj = temp_dir.path().join("proj");

    let caller = CallerLocation::new(proj.join("src/mod.py"));
    let err = project_paths::for_caller(&caller, &Settings::default()).unwrap_err();

    match &err {
        Error::ConfigurationNotFound { table, path } => {
            assert_eq!(table, "tool.project-paths");
            assert_eq!(path, &proj.join("pyproject.toml"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("[tool.project-paths]"));
}

#[test]
fn test_caller_outside_any_project() {
    let temp_dir = TempDir::new().unwrap();
    let lonely = temp_dir.path().join("lonely");
    fs::create_dir_all(&lonely).unwrap();
    fs::write(lonely.join("script.py"), "").unwrap();

    // A file name nothing above the temp dir will have
    let settings = Settings::default().with_file_name("project-paths-test-absent.toml");
    let caller = CallerLocation::new(lonely.join("script.py"));
    let err = project_paths::for_caller(&caller, &settings).unwrap_err();

    assert!(err.is_not_found());
    match err {
        Error::ConfigFileNotFound { start, .. } => assert_eq!(start, lonely),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_nested_project_shadows_outer() {
    let temp_dir = create_project("[tool.project-paths]\nouter = \"outer\"\n");
    let inner = temp_dir.path().join("proj/src/inner");
    fs::create_dir_all(&inner).unwrap();
    fs::write(
        inner.join("pyproject.toml"),
        "[tool.project-paths]\ninner = \"inner\"\n",
    )
    .unwrap();
    fs::write(inner.join("lib.py"), "").unwrap();

    let outer_caller = CallerLocation::new(temp_dir.path().join("proj/src/mod.py"));
    let inner_caller = CallerLocation::new(inner.join("lib.py"));

    let outer = project_paths::for_caller(&outer_caller, &Settings::default()).unwrap();
    let inner_paths = project_paths::for_caller(&inner_caller, &Settings::default()).unwrap();

    assert!(outer.contains("outer"));
    assert!(inner_paths.contains("inner"));
    assert!(!inner_paths.contains("outer"));
}

#[test]
fn test_explicit_build_matches_discovery() {
    let temp_dir = create_project("[tool.project-paths]\ndocs = \"docs\"\n");
    let proj = temp_dir.path().join("proj");

    let found = project_paths::find_configuration_file(&proj.join("src"), "pyproject.toml").unwrap();
    let built = Registry::build(found.as_path(), &Settings::default()).unwrap();
    let discovered = project_paths::for_caller(
        &CallerLocation::new(proj.join("src/mod.py")),
        &Settings::default(),
    )
    .unwrap();

    assert_eq!(built, discovered);
}
