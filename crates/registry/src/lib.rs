//! Access paths declared in `pyproject.toml`
//!
//! Add a table to the project's configuration file:
//!
//! ```toml
//! [tool.project-paths]
//! # You can place as many paths as you want:
//! tests = "path/to/my/tests/"
//! docs = "path/to/my/docs/"
//! absolute = "/opt/absolute/path"
//! ```
//!
//! Then look paths up from anywhere inside the project:
//!
//! ```no_run
//! let paths = project_paths::paths!()?;
//! let readme = paths.get("docs")?.as_path().join("README.md");
//! assert!(paths.get("absolute")?.as_path().is_absolute());
//! # Ok::<(), project_paths::Error>(())
//! ```
//!
//! The configuration file is found by walking up from the caller's source
//! file, so code in different projects of one process each see their own
//! table. [`paths!`] anchors the caller's file at compile time and works from
//! any working directory. The [`current`] function relies on cargo's runtime
//! environment to locate relative source files, so it fails with
//! [`Error::CallerNotFound`] in a binary started outside cargo; such programs
//! use [`locate_from_cwd`] and [`Registry::build`].
//!
//! This crate handles:
//! - Caller-relative discovery (`discovery`)
//! - Parsing and resolving the table (`registry`)
//! - The per-call accessor and an opt-in per-location cache
//! - File name and table settings, with environment overrides

pub mod accessor;
pub mod cache;
pub mod discovery;
pub mod registry;
pub mod settings;

// Re-export error and path types from core
pub use project_paths_core::{AbsPath, Error, RelPath, Result};

// Re-export main API
pub use accessor::{current, current_with, for_caller, project_root};
pub use cache::{RegistryCache, cached, clear_cached, invalidate_cached};
pub use discovery::{
    CallerLocation, find_configuration_file, locate_configuration_file, locate_from_cwd,
};
pub use registry::Registry;
pub use settings::{Settings, TableName};
