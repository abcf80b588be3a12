//! Application code living inside the demo project
//!
//! Compiled into the accessor tests with `#[path]`, so its `file!()` points
//! below the demo `pyproject.toml`.

use project_paths::{AbsPath, Registry, Result};
use std::sync::Arc;

pub fn registry() -> Result<Registry> {
    project_paths::current()
}

pub fn registry_from_macro() -> Result<Registry> {
    project_paths::paths!()
}

pub fn root() -> Result<AbsPath> {
    project_paths::project_root()
}

pub fn cached() -> Result<Arc<Registry>> {
    project_paths::cached()
}
