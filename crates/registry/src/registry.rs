//! The path registry
//!
//! A [`Registry`] is the resolved form of one `[tool.project-paths]` table:
//!
//! ```toml
//! [tool.project-paths]
//! tests = "tests/"        # -> <dir of pyproject.toml>/tests
//! absolute = "/opt/data"  # -> /opt/data
//! ```
//!
//! Relative values are joined onto the directory holding the configuration
//! file, absolute values are kept verbatim. Nothing is checked for existence.

use crate::Result;
use crate::settings::{Settings, TableName};
use indexmap::IndexMap;
use project_paths_core::{AbsPath, Error};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Immutable mapping from declared name to resolved path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registry {
    /// Configuration file the entries were read from
    config_path: AbsPath,
    /// Entries in declaration order
    #[serde(rename = "paths")]
    entries: IndexMap<String, AbsPath>,
}

impl Registry {
    /// Read and resolve the paths table of a configuration file
    ///
    /// A relative `configuration_path` is made absolute against the working
    /// directory first.
    ///
    /// # Errors
    ///
    /// - `Error::ReadConfig` if the file cannot be read
    /// - `Error::ParseConfig` if it is not valid TOML
    /// - `Error::ConfigurationNotFound` if the table is missing
    /// - `Error::InvalidEntry` if any entry is not a string path
    pub fn build(configuration_path: impl AsRef<Path>, settings: &Settings) -> Result<Self> {
        let config_path = AbsPath::absolutize(configuration_path.as_ref())?;
        let content = fs::read_to_string(config_path.as_path()).map_err(|source| {
            Error::ReadConfig {
                path: config_path.as_path().to_path_buf(),
                source,
            }
        })?;

        Self::from_toml_str(&content, config_path, settings)
    }

    /// Resolve the paths table of an in-memory document
    ///
    /// `config_path` is where the document lives; relative entries are
    /// resolved against its parent directory.
    pub fn from_toml_str(content: &str, config_path: AbsPath, settings: &Settings) -> Result<Self> {
        let document: toml::Table = toml::from_str(content).map_err(|e| Error::ParseConfig {
            path: config_path.as_path().to_path_buf(),
            source: Box::new(e),
        })?;

        let Some(table) = find_table(&document, settings.table()) else {
            return Err(Error::ConfigurationNotFound {
                table: settings.table().to_string(),
                path: config_path.into_path_buf(),
            });
        };

        let base = config_path.parent().unwrap_or_else(|| config_path.clone());
        let mut entries = IndexMap::with_capacity(table.len());

        for (name, value) in table {
            let invalid = |reason: String| Error::InvalidEntry {
                name: name.clone(),
                path: config_path.as_path().to_path_buf(),
                reason,
            };

            if name.is_empty() {
                return Err(invalid("names must not be empty".to_string()));
            }
            let Some(raw) = value.as_str() else {
                return Err(invalid(format!("expected a string, found {}", value.type_str())));
            };
            if name.starts_with('_') {
                warn!(
                    "Path name {:?} in {} starts with an underscore",
                    name, config_path
                );
            }

            let resolved = base
                .resolve(Path::new(raw))
                .map_err(|_| invalid(format!("{raw:?} is neither relative nor absolute")))?;
            entries.insert(name.clone(), resolved);
        }

        debug!("Resolved {} paths from {}", entries.len(), config_path);

        Ok(Self {
            config_path,
            entries,
        })
    }

    /// Resolved path for `name`
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownPath` if the table does not declare `name`.
    pub fn get(&self, name: &str) -> Result<&AbsPath> {
        self.entries.get(name).ok_or_else(|| Error::UnknownPath {
            name: name.to_string(),
            config: self.config_path.as_path().to_path_buf(),
        })
    }

    /// Whether `name` is declared
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Every declared name, sorted
    pub fn names(&self) -> BTreeSet<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Number of declared paths
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AbsPath)> {
        self.entries.iter().map(|(name, path)| (name.as_str(), path))
    }

    /// Configuration file the registry was built from
    pub fn config_path(&self) -> &AbsPath {
        &self.config_path
    }

    /// Directory holding the configuration file
    pub fn project_root(&self) -> AbsPath {
        self.config_path
            .parent()
            .unwrap_or_else(|| self.config_path.clone())
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Registry({})", self.config_path)
    }
}

fn find_table<'a>(document: &'a toml::Table, name: &TableName) -> Option<&'a toml::Table> {
    name.segments()
        .iter()
        .try_fold(document, |table, key| table.get(key)?.as_table())
}
