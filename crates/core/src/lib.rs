//! Core types for project-paths
//!
//! This is the foundation crate that the registry and the CLI depend on.
//! It provides:
//! - The error taxonomy shared by discovery and the registry
//! - Path types (`AbsPath`, `RelPath`)
//!
//! This crate has no dependencies on other project-paths crates.

pub mod error;
pub mod path;

pub use error::{Error, Result};
pub use path::{AbsPath, RelPath};
