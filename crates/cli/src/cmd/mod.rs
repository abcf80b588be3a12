//! CLI command implementations
//!
//! One module per subcommand of `project-paths`.

pub mod get;
pub mod list;
pub mod locate;
pub mod root;
