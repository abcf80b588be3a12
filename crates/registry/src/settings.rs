//! Discovery settings
//!
//! Which file name to search for and which dotted table inside it holds the
//! path entries. Defaults match the `[tool.project-paths]` convention:
//!
//! ```toml
//! # pyproject.toml
//! [tool.project-paths]
//! tests = "path/to/my/tests/"
//! absolute = "/opt/absolute/path"
//! ```

use crate::Result;
use project_paths_core::Error;
use std::fmt;
use std::str::FromStr;

/// Configuration file searched for by default
pub const DEFAULT_FILE_NAME: &str = "pyproject.toml";

/// Table holding the path entries by default
pub const DEFAULT_TABLE: &str = "tool.project-paths";

/// Environment variable overriding the configuration file name
pub const FILE_NAME_ENV: &str = "PROJECT_PATHS_FILE";

/// Environment variable overriding the dotted table name
pub const TABLE_ENV: &str = "PROJECT_PATHS_TABLE";

/// A dotted TOML table name such as `tool.project-paths`
///
/// Segments are split on `.`; quoted keys containing dots are not supported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName {
    dotted: String,
    segments: Vec<String>,
}

impl TableName {
    /// Parse a dotted table name
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTable` if the name or any segment is empty.
    pub fn parse(dotted: &str) -> Result<Self> {
        let segments: Vec<String> = dotted.split('.').map(str::to_owned).collect();
        if segments.iter().any(String::is_empty) {
            return Err(Error::InvalidTable(dotted.to_string()));
        }

        Ok(Self {
            dotted: dotted.to_string(),
            segments,
        })
    }

    /// Table keys from the document root down
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The dotted form, as written in the TOML header
    pub fn as_str(&self) -> &str {
        &self.dotted
    }
}

impl FromStr for TableName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted)
    }
}

/// Settings for discovery and registry construction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Settings {
    file_name: String,
    table: TableName,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
            table: TableName {
                dotted: DEFAULT_TABLE.to_string(),
                segments: DEFAULT_TABLE.split('.').map(str::to_owned).collect(),
            },
        }
    }
}

impl Settings {
    /// Create settings for a custom file name and table
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTable` if `table` is not a valid dotted name.
    pub fn new(file_name: impl Into<String>, table: &str) -> Result<Self> {
        Ok(Self {
            file_name: file_name.into(),
            table: TableName::parse(table)?,
        })
    }

    /// Read overrides from `PROJECT_PATHS_FILE` and `PROJECT_PATHS_TABLE`
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Settings::from_env`], with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        if let Some(file_name) = lookup(FILE_NAME_ENV).filter(|v| !v.is_empty()) {
            settings.file_name = file_name;
        }
        if let Some(table) = lookup(TABLE_ENV).filter(|v| !v.is_empty()) {
            settings.table = TableName::parse(&table)?;
        }
        Ok(settings)
    }

    /// Replace the configuration file name
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Replace the table name
    pub fn with_table(mut self, table: &str) -> Result<Self> {
        self.table = TableName::parse(table)?;
        Ok(self)
    }

    /// Configuration file name searched for during discovery
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Table holding the path entries
    pub fn table(&self) -> &TableName {
        &self.table
    }
}
