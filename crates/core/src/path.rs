//! Type-safe path types
//!
//! Two newtypes keep resolved output paths apart from raw table values:
//!
//! - [`AbsPath`]: Absolute filesystem paths (every registry entry is one)
//! - [`RelPath`]: Relative paths, joined onto a base directory
//!
//! # Examples
//!
//! ```
//! use project_paths_core::path::{AbsPath, RelPath};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let root = AbsPath::new("/proj".into())?;
//! let tests = RelPath::new("tests".into())?;
//!
//! let resolved = root.join(&tests);
//! assert_eq!(resolved.as_path(), std::path::Path::new("/proj/tests"));
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// An absolute path on the filesystem
///
/// This type guarantees that the path is absolute (starts with `/` on Unix or a drive letter on Windows).
/// Existence is never checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "PathBuf", into = "PathBuf")]
pub struct AbsPath(PathBuf);

impl AbsPath {
    /// Create a new `AbsPath` from a `PathBuf`
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not absolute.
    pub fn new(path: PathBuf) -> Result<Self> {
        if path.is_absolute() {
            Ok(AbsPath(path))
        } else {
            Err(Error::PathNotAbsolute { path })
        }
    }

    /// Make any path absolute against the current working directory
    ///
    /// This is lexical: symlinks are not resolved and the path need not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty or the working directory cannot be read.
    pub fn absolutize(path: &Path) -> Result<Self> {
        Ok(AbsPath(std::path::absolute(path)?))
    }

    /// Resolve a raw path value against `base`
    ///
    /// Absolute values are kept verbatim, relative ones are joined onto `base`.
    ///
    /// ```
    /// use project_paths_core::path::AbsPath;
    /// use std::path::Path;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let base = AbsPath::new("/proj".into())?;
    /// assert_eq!(base.resolve(Path::new("docs"))?.as_path(), Path::new("/proj/docs"));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Error::PathNotAbsolute` for a value that is rooted but not
    /// absolute, such as `\foo` or `C:foo` on Windows.
    pub fn resolve(&self, value: &Path) -> Result<Self> {
        match RelPath::new(value.to_path_buf()) {
            Ok(rel) => Ok(self.join(&rel)),
            Err(_) => AbsPath::new(value.to_path_buf()),
        }
    }

    /// Get the underlying `Path`
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Convert to a `PathBuf`
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }

    /// Join with a relative path to create a new absolute path
    pub fn join(&self, rel: &RelPath) -> Self {
        AbsPath(self.0.join(rel.as_path()))
    }

    /// Get the parent directory
    ///
    /// Returns `None` if this is the root directory.
    pub fn parent(&self) -> Option<Self> {
        self.0.parent().map(|p| AbsPath(p.to_path_buf()))
    }

    /// Iterate over this path and each of its ancestors, nearest first
    pub fn ancestors(&self) -> impl Iterator<Item = &Path> {
        self.0.ancestors()
    }

    /// Get the file name
    pub fn file_name(&self) -> Option<&str> {
        self.0.file_name().and_then(|s| s.to_str())
    }
}

impl AsRef<Path> for AbsPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl TryFrom<PathBuf> for AbsPath {
    type Error = Error;

    fn try_from(path: PathBuf) -> Result<Self> {
        Self::new(path)
    }
}

impl From<AbsPath> for PathBuf {
    fn from(path: AbsPath) -> Self {
        path.0
    }
}

/// A relative path (no leading slash)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PathBuf", into = "PathBuf")]
pub struct RelPath(PathBuf);

impl RelPath {
    /// Create a new `RelPath` from a `PathBuf`
    ///
    /// # Errors
    ///
    /// Returns an error if the path is absolute.
    pub fn new(path: PathBuf) -> Result<Self> {
        // `has_root` catches `\foo` on Windows, which is neither absolute nor safe to join
        if path.is_relative() && !path.has_root() {
            Ok(RelPath(path))
        } else {
            Err(Error::PathNotRelative { path })
        }
    }

    /// Get the underlying `Path`
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Convert to a `PathBuf`
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl TryFrom<PathBuf> for RelPath {
    type Error = Error;

    fn try_from(path: PathBuf) -> Result<Self> {
        Self::new(path)
    }
}

impl From<RelPath> for PathBuf {
    fn from(path: RelPath) -> Self {
        path.0
    }
}

impl std::fmt::Display for AbsPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl std::fmt::Display for RelPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
