//! Common types shared across CLI commands

use anyhow::{Context, Result};
use project_paths::{AbsPath, Registry, Settings};
use std::path::PathBuf;

/// Shared state for command execution
///
/// The CLI has no calling source file, so discovery starts from `--from` or
/// the working directory.
#[derive(Debug, Clone)]
pub struct RuntimeContext {
    /// File name and table to use
    pub settings: Settings,
    /// Directory to start discovery from; `None` means the working directory
    pub start_dir: Option<PathBuf>,
}

impl RuntimeContext {
    /// Create a runtime context
    pub fn new(settings: Settings, start_dir: Option<PathBuf>) -> Self {
        Self {
            settings,
            start_dir,
        }
    }

    /// Locate the configuration file
    pub fn config_path(&self) -> Result<AbsPath> {
        let found = match &self.start_dir {
            Some(dir) => project_paths::find_configuration_file(dir, self.settings.file_name()),
            None => project_paths::locate_from_cwd(&self.settings),
        };
        found.with_context(|| format!("Failed to locate {}", self.settings.file_name()))
    }

    /// Locate the configuration file and build its registry
    pub fn registry(&self) -> Result<Registry> {
        let config_path = self.config_path()?;
        Registry::build(config_path.as_path(), &self.settings)
            .with_context(|| format!("Failed to load paths from {config_path}"))
    }
}
