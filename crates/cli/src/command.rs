//! Command trait for the project-paths CLI
//!
//! Every subcommand receives the same [`RuntimeContext`], which knows where to
//! start discovery and which settings to use.

use crate::common::RuntimeContext;
use anyhow::Result;

/// Trait for all project-paths commands
///
/// Commands that produce a value return it through `Output` so tests can
/// check it without capturing stdout; `execute` does the printing.
pub trait Command {
    /// The type returned by this command
    type Output;

    /// Execute the command with the given runtime context
    ///
    /// # Errors
    ///
    /// Returns an error if discovery or registry construction fails, with
    /// enough context for the user to fix the configuration file.
    fn execute(&self, context: &RuntimeContext) -> Result<Self::Output>;
}
