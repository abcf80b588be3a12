//! Get command implementation
//!
//! Print the resolved path for one declared name.

use anyhow::{Result, bail};
use clap::Args;
use project_paths::AbsPath;

use crate::command::Command;
use crate::common::RuntimeContext;

/// Get command arguments
#[derive(Debug, Args)]
pub struct GetCommand {
    /// Name declared in the paths table
    pub name: String,
}

impl GetCommand {
    /// Resolve `name` without printing
    pub fn resolve(&self, context: &RuntimeContext) -> Result<AbsPath> {
        let registry = context.registry()?;

        match registry.get(&self.name) {
            Ok(path) => Ok(path.clone()),
            Err(e) if e.is_unknown_path() => {
                let names: Vec<&str> = registry.names().into_iter().collect();
                if names.is_empty() {
                    bail!("{e}; no paths are declared");
                }
                bail!("{e}; available: {}", names.join(", "));
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl Command for GetCommand {
    type Output = AbsPath;

    fn execute(&self, context: &RuntimeContext) -> Result<AbsPath> {
        let path = self.resolve(context)?;
        println!("{path}");
        Ok(path)
    }
}
