//! The public accessor
//!
//! Every call discovers the configuration file relative to its own caller and
//! builds a fresh [`Registry`]. [`paths!`](crate::paths) is the main entry
//! point; [`current`] is its function form. Two callers in different directories can get
//! different registries, so nothing is shared between calls; see
//! [`cache`](crate::cache) for the opt-in cached variant.

use crate::Result;
use crate::discovery::{CallerLocation, locate_configuration_file};
use crate::registry::Registry;
use crate::settings::Settings;
use project_paths_core::AbsPath;

/// Registry for the calling source file
///
/// Settings come from the environment (see [`Settings::from_env`]).
///
/// The caller's file is usually recorded relative to the workspace root and is
/// located through the `CARGO_MANIFEST_DIR` that `cargo run` and `cargo test`
/// export. The working directory is never consulted. A deployed binary, or
/// any process started outside cargo, gets `Error::CallerNotFound`; prefer
/// [`paths!`](crate::paths), or fall back to
/// [`locate_from_cwd`](crate::locate_from_cwd) when the working directory is
/// the intended starting point:
///
/// ```no_run
/// use project_paths::{Registry, Settings};
///
/// let paths = match project_paths::current() {
///     Ok(paths) => paths,
///     Err(project_paths::Error::CallerNotFound { .. }) => {
///         let settings = Settings::from_env()?;
///         Registry::build(project_paths::locate_from_cwd(&settings)?, &settings)?
///     }
///     Err(err) => return Err(err),
/// };
/// let readme = paths.get("docs")?.as_path().join("README.md");
/// # Ok::<(), project_paths::Error>(())
/// ```
#[track_caller]
pub fn current() -> Result<Registry> {
    let caller = CallerLocation::here();
    for_caller(&caller, &Settings::from_env()?)
}

/// Registry for the calling source file, with explicit settings
#[track_caller]
pub fn current_with(settings: &Settings) -> Result<Registry> {
    let caller = CallerLocation::here();
    for_caller(&caller, settings)
}

/// Registry for an explicit caller location
pub fn for_caller(caller: &CallerLocation, settings: &Settings) -> Result<Registry> {
    let config_path = locate_configuration_file(caller, settings)?;
    Registry::build(config_path.as_path(), settings)
}

/// Directory of the configuration file governing the calling source file
///
/// Only discovery runs; the paths table is not read.
#[track_caller]
pub fn project_root() -> Result<AbsPath> {
    let caller = CallerLocation::here();
    let config_path = locate_configuration_file(&caller, &Settings::from_env()?)?;
    Ok(config_path.parent().unwrap_or(config_path))
}

/// Registry for the calling source file, anchored at compile time
///
/// This is the preferred accessor. Relative source files are resolved against
/// the caller's `CARGO_MANIFEST_DIR` as captured at compile time, so neither
/// the working directory nor the runtime environment matter.
///
/// ```no_run
/// let paths = project_paths::paths!()?;
/// let custom = project_paths::paths!(project_paths::Settings::default())?;
/// # Ok::<(), project_paths::Error>(())
/// ```
#[macro_export]
macro_rules! paths {
    () => {
        $crate::Settings::from_env()
            .and_then(|settings| $crate::accessor::for_caller(&$crate::caller!(), &settings))
    };
    ($settings:expr) => {
        $crate::accessor::for_caller(&$crate::caller!(), &$settings)
    };
}
