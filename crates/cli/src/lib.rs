//! project-paths CLI library
//!
//! This library contains the CLI logic for `project-paths`, making it
//! reusable for testing. The binary lists and resolves the paths a project
//! declares in its `[tool.project-paths]` table.

pub mod cmd;
pub mod command;
pub mod common;
pub mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use project_paths::settings::{DEFAULT_FILE_NAME, DEFAULT_TABLE, FILE_NAME_ENV, TABLE_ENV};
use project_paths::{Settings, TableName};
use std::path::PathBuf;

use command::Command;
use common::RuntimeContext;

/// project-paths - resolve the paths a project declares in its configuration file
#[derive(Debug, Parser)]
#[command(name = "project-paths")]
#[command(about = "Resolve paths declared in pyproject.toml")]
#[command(version)]
#[command(long_about = "Resolve paths declared in pyproject.toml

The configuration file is searched for in the starting directory and then in
each parent directory. Relative entries resolve against the directory holding
the file; absolute entries are printed as written.

  [tool.project-paths]
  tests = \"tests/\"
  data = \"/opt/data\"")]
pub struct Cli {
    /// Configuration file name to search for
    #[arg(long, env = FILE_NAME_ENV, value_name = "NAME", default_value = DEFAULT_FILE_NAME)]
    pub file_name: String,

    /// Dotted table holding the paths
    #[arg(long, env = TABLE_ENV, value_name = "TABLE", default_value = DEFAULT_TABLE)]
    pub table: TableName,

    /// Directory to start searching from (defaults to the working directory)
    #[arg(long, value_name = "DIR")]
    pub from: Option<PathBuf>,

    /// Enable verbose output (shows DEBUG level logs)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "PROJECT_PATHS_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the project-paths CLI
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every declared path
    List(cmd::list::ListCommand),

    /// Print the resolved path for one name
    Get(cmd::get::GetCommand),

    /// Print the project root (the directory holding the configuration file)
    Root,

    /// Print the configuration file path
    Locate,
}

impl Cli {
    /// Build the runtime context from the parsed arguments
    pub fn context(&self) -> Result<RuntimeContext> {
        let settings = Settings::new(self.file_name.clone(), self.table.as_str())
            .context("Invalid settings")?;
        Ok(RuntimeContext::new(settings, self.from.clone()))
    }
}

/// Main entry point for the CLI
pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose, cli.log_file.as_deref())?;

    let context = cli.context()?;
    tracing::debug!("Running with {:?}", context);

    execute_command(&cli.command, &context)
}

fn execute_command(command: &Commands, context: &RuntimeContext) -> Result<()> {
    match command {
        Commands::List(list) => list.execute(context),
        Commands::Get(get) => get.execute(context).map(drop),
        Commands::Root => cmd::root::RootCommand.execute(context).map(drop),
        Commands::Locate => cmd::locate::LocateCommand.execute(context).map(drop),
    }
}
