//! Caller-relative discovery of the configuration file
//!
//! Discovery runs in two steps:
//!
//! 1. Find the source file of the caller, the first frame outside this
//!    library. Rust has no runtime stack walk, so the frame is captured at
//!    compile time: [`CallerLocation::here`] reads
//!    [`std::panic::Location::caller`], and every public accessor of this crate
//!    is `#[track_caller]`, which makes the compiler skip our own frames. The
//!    [`caller!`](crate::caller) macro captures `file!()` directly.
//! 2. Walk from the caller file's directory up to the filesystem root and
//!    return the first configuration file found.
//!
//! [`find_configuration_file`] exposes step 2 on its own for callers that
//! already know their base directory.

use crate::Result;
use crate::settings::Settings;
use project_paths_core::{AbsPath, Error};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Set by cargo at build time, and for the processes of `cargo run` and
/// `cargo test`
const MANIFEST_DIR_ENV: &str = "CARGO_MANIFEST_DIR";

/// Where an accessor was called from
///
/// The compiler records source files relative to the directory it was invoked
/// in (the workspace root under cargo). A relative file is located by trying
/// it against the anchor directory and each of its ancestors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerLocation {
    file: PathBuf,
    module: Option<&'static str>,
    anchor: Option<PathBuf>,
}

impl CallerLocation {
    /// Capture the location of the nearest caller outside this library
    ///
    /// The compiler usually records workspace files relative to the workspace
    /// root. Such a file is anchored at the `CARGO_MANIFEST_DIR` that cargo
    /// sets for `cargo run` and `cargo test`. Outside cargo there is no anchor
    /// and a relative file cannot be located; use the [`caller!`](crate::caller)
    /// macro or [`locate_from_cwd`] instead.
    #[track_caller]
    pub fn here() -> Self {
        let caller = Self::new(std::panic::Location::caller().file());
        match std::env::var_os(MANIFEST_DIR_ENV) {
            Some(dir) if !dir.is_empty() => caller.with_anchor(dir),
            _ => caller,
        }
    }

    /// Use an explicit source file
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            module: None,
            anchor: None,
        }
    }

    /// Attach the caller's module path, used in error messages
    #[must_use]
    pub fn with_module(mut self, module: &'static str) -> Self {
        self.module = Some(module);
        self
    }

    /// Anchor relative source files at `dir`
    #[must_use]
    pub fn with_anchor(mut self, dir: impl Into<PathBuf>) -> Self {
        self.anchor = Some(dir.into());
        self
    }

    /// The source file as recorded
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// The caller's module path, if captured
    pub fn module(&self) -> Option<&'static str> {
        self.module
    }

    /// Locate the caller's source file on disk
    ///
    /// # Errors
    ///
    /// Returns `Error::CallerNotFound` if no candidate exists, or if the file
    /// is relative and there is no anchor to resolve it against.
    pub fn source_file(&self) -> Result<AbsPath> {
        if self.file.is_absolute() {
            if self.file.is_file() {
                return AbsPath::new(self.file.clone());
            }
            return Err(self.not_found());
        }

        // Never fall back to the working directory
        let Some(anchor) = &self.anchor else {
            debug!("No anchor for relative caller file {}", self.file.display());
            return Err(self.not_found());
        };
        let anchor = AbsPath::absolutize(anchor)?;

        for dir in anchor.ancestors() {
            let candidate = dir.join(&self.file);
            if candidate.is_file() {
                debug!("Caller file {} found at {}", self.file.display(), candidate.display());
                return AbsPath::new(candidate);
            }
        }

        Err(self.not_found())
    }

    /// Directory of the caller's source file, where the upward search starts
    pub fn start_dir(&self) -> Result<AbsPath> {
        self.source_file()?.parent().ok_or_else(|| self.not_found())
    }

    fn not_found(&self) -> Error {
        Error::CallerNotFound {
            file: self.file.clone(),
            module: self.module.unwrap_or("<unknown>").to_string(),
        }
    }
}

/// Capture the calling source file with a compile-time anchor
///
/// Expands `file!()`, `module_path!()` and `CARGO_MANIFEST_DIR` at the call
/// site, so the result does not depend on the working directory.
///
/// ```no_run
/// let caller = project_paths::caller!();
/// let config = project_paths::locate_configuration_file(&caller, &Default::default())?;
/// # Ok::<(), project_paths::Error>(())
/// ```
#[macro_export]
macro_rules! caller {
    () => {
        $crate::discovery::CallerLocation::new(::core::file!())
            .with_module(::core::module_path!())
            .with_anchor(::core::env!("CARGO_MANIFEST_DIR"))
    };
}

/// Search `start` and its ancestors for `file_name`
///
/// Only regular files match; a directory with the same name is skipped.
///
/// # Errors
///
/// Returns `Error::ConfigFileNotFound` naming `start` when the root is
/// reached without a match.
pub fn find_configuration_file(start: &Path, file_name: &str) -> Result<AbsPath> {
    let start = AbsPath::absolutize(start)?;

    for dir in start.ancestors() {
        let candidate = dir.join(file_name);
        if candidate.is_file() {
            debug!("Found {} for {}", candidate.display(), start);
            return AbsPath::new(candidate);
        }
    }

    Err(Error::ConfigFileNotFound {
        file_name: file_name.to_string(),
        start: start.into_path_buf(),
    })
}

/// Find the configuration file governing `caller`
pub fn locate_configuration_file(caller: &CallerLocation, settings: &Settings) -> Result<AbsPath> {
    let start = caller.start_dir()?;
    debug!(
        "Searching for {} from {} (caller {})",
        settings.file_name(),
        start,
        caller.module().unwrap_or("<unknown>")
    );
    find_configuration_file(start.as_path(), settings.file_name())
}

/// Find the configuration file governing the working directory
///
/// Used when there is no source file to anchor on, such as a CLI invocation.
pub fn locate_from_cwd(settings: &Settings) -> Result<AbsPath> {
    let cwd = std::env::current_dir()?;
    find_configuration_file(&cwd, settings.file_name())
}
