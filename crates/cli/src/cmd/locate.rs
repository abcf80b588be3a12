//! Locate command implementation
//!
//! Print the configuration file discovery settles on.

use anyhow::Result;
use project_paths::AbsPath;

use crate::command::Command;
use crate::common::RuntimeContext;

/// Locate command
#[derive(Debug, Clone, Copy)]
pub struct LocateCommand;

impl Command for LocateCommand {
    type Output = AbsPath;

    fn execute(&self, context: &RuntimeContext) -> Result<AbsPath> {
        let config_path = context.config_path()?;
        println!("{config_path}");
        Ok(config_path)
    }
}
