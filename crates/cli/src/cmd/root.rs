//! Root command implementation
//!
//! Print the directory holding the configuration file.

use anyhow::Result;
use project_paths::AbsPath;

use crate::command::Command;
use crate::common::RuntimeContext;

/// Root command
#[derive(Debug, Clone, Copy)]
pub struct RootCommand;

impl Command for RootCommand {
    type Output = AbsPath;

    fn execute(&self, context: &RuntimeContext) -> Result<AbsPath> {
        let config_path = context.config_path()?;
        let root = config_path.parent().unwrap_or(config_path);
        println!("{root}");
        Ok(root)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use project_paths::Settings;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_root_does_not_need_table() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("src");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join("pyproject.toml"), "[project]\n").unwrap();

        let context = RuntimeContext::new(Settings::default(), Some(nested));
        let root = RootCommand.execute(&context).unwrap();

        assert_eq!(root.as_path(), temp_dir.path());
    }
}
