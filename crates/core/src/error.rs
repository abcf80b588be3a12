//! Error types for project-paths
//!
//! Discovery and registry construction fail with one of these variants.
//! Nothing is retried: both steps are deterministic for a given filesystem.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating a configuration file or resolving paths from it
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// The calling source file could not be found on disk
    #[error("unable to determine the file of the calling module {module}: {} does not exist", file.display())]
    CallerNotFound {
        /// File name as recorded by the compiler
        file: PathBuf,
        /// Module path of the caller, when known
        module: String,
    },

    /// No ancestor directory contains the configuration file
    #[error("cannot find {file_name} within {} or its parents", start.display())]
    ConfigFileNotFound {
        /// Name of the configuration file that was searched for
        file_name: String,
        /// Directory the search started from
        start: PathBuf,
    },

    /// The configuration file exists but lacks the paths table
    #[error("cannot find [{table}] within {}", path.display())]
    ConfigurationNotFound {
        /// Dotted table name, e.g. `tool.project-paths`
        table: String,
        /// Absolute path of the configuration file
        path: PathBuf,
    },

    /// Lookup of a name that the registry does not declare
    #[error("no path named {name:?} in {}", config.display())]
    UnknownPath {
        /// Requested name
        name: String,
        /// Configuration file the registry was built from
        config: PathBuf,
    },

    /// A table entry cannot be turned into a path
    #[error("invalid entry {name:?} in {}: {reason}", path.display())]
    InvalidEntry {
        /// Offending key
        name: String,
        /// Configuration file containing the entry
        path: PathBuf,
        /// Why the entry was rejected
        reason: String,
    },

    /// A dotted table name with an empty segment
    #[error("invalid table name {0:?}")]
    InvalidTable(String),

    /// Reading the configuration file failed
    #[error("failed to read {}: {source}", path.display())]
    ReadConfig {
        /// Configuration file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML
    ///
    /// Boxed to keep the enum small
    #[error("failed to parse {}: {source}", path.display())]
    ParseConfig {
        /// Configuration file path
        path: PathBuf,
        /// The underlying TOML error
        #[source]
        source: Box<toml::de::Error>,
    },

    /// Path is not absolute
    #[error("Path must be absolute: {}", path.display())]
    PathNotAbsolute {
        /// The rejected path
        path: PathBuf,
    },

    /// Path is not relative
    #[error("Path must be relative: {}", path.display())]
    PathNotRelative {
        /// The rejected path
        path: PathBuf,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the discovery and missing-table failures
    ///
    /// These are the errors a caller can fix by adding a configuration file
    /// or table, as opposed to fixing its contents.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CallerNotFound { .. }
                | Self::ConfigFileNotFound { .. }
                | Self::ConfigurationNotFound { .. }
        )
    }

    /// True when a lookup asked for an undeclared name
    pub fn is_unknown_path(&self) -> bool {
        matches!(self, Self::UnknownPath { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
