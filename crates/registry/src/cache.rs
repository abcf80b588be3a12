//! Per-location registry cache
//!
//! [`current`](crate::current) rebuilds on every call. Hot paths that read the
//! same table repeatedly can use a [`RegistryCache`] instead: entries are
//! keyed by the caller's directory and the settings, and stay until they are
//! invalidated explicitly. Failed builds are never cached.

use crate::Result;
use crate::discovery::{CallerLocation, find_configuration_file};
use crate::registry::Registry;
use crate::settings::Settings;
use project_paths_core::AbsPath;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    start_dir: AbsPath,
    settings: Settings,
}

/// Registries keyed by caller directory
#[derive(Debug, Default)]
pub struct RegistryCache {
    entries: HashMap<CacheKey, Arc<Registry>>,
}

impl RegistryCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached registry for `caller`, building it on first use
    pub fn get_or_build(
        &mut self,
        caller: &CallerLocation,
        settings: &Settings,
    ) -> Result<Arc<Registry>> {
        let key = CacheKey {
            start_dir: caller.start_dir()?,
            settings: settings.clone(),
        };

        if let Some(registry) = self.entries.get(&key) {
            debug!("Using cached {} for {}", registry, key.start_dir);
            return Ok(Arc::clone(registry));
        }

        let config_path = find_configuration_file(key.start_dir.as_path(), settings.file_name())?;
        let registry = Arc::new(Registry::build(config_path.as_path(), settings)?);
        self.entries.insert(key, Arc::clone(&registry));

        Ok(registry)
    }

    /// Drop every entry built from `config_path`
    ///
    /// Returns the number of entries removed.
    pub fn invalidate(&mut self, config_path: &Path) -> usize {
        let target = std::path::absolute(config_path).unwrap_or_else(|_| config_path.to_path_buf());
        let before = self.entries.len();
        self.entries
            .retain(|_, registry| registry.config_path().as_path() != target);
        before - self.entries.len()
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached registries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static GLOBAL_CACHE: LazyLock<Mutex<RegistryCache>> = LazyLock::new(Mutex::default);

// Inserts are single operations; a poisoned map is still consistent
fn global_cache() -> MutexGuard<'static, RegistryCache> {
    GLOBAL_CACHE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Cached counterpart of [`current`](crate::current)
#[track_caller]
pub fn cached() -> Result<Arc<Registry>> {
    let caller = CallerLocation::here();
    let settings = Settings::from_env()?;
    global_cache().get_or_build(&caller, &settings)
}

/// Drop process-wide cache entries built from `config_path`
pub fn invalidate_cached(config_path: &Path) -> usize {
    global_cache().invalidate(config_path)
}

/// Empty the process-wide cache
pub fn clear_cached() {
    global_cache().clear();
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // Layout: root/pyproject.toml, root/a/one.rs, root/b/two.rs
    fn create_project(table: &str) -> (TempDir, PathBuf, CallerLocation, CallerLocation) {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("pyproject.toml");
        fs::write(&config, table).unwrap();
        for (dir, file) in [("a", "one.rs"), ("b", "two.rs")] {
            fs::create_dir_all(temp_dir.path().join(dir)).unwrap();
            fs::write(temp_dir.path().join(dir).join(file), "").unwrap();
        }
        let one = CallerLocation::new(temp_dir.path().join("a/one.rs"));
        let two = CallerLocation::new(temp_dir.path().join("b/two.rs"));
        (temp_dir, config, one, two)
    }

    #[test]
    fn test_second_lookup_is_cached() {
        let (_temp_dir, _config, one, _) = create_project("[tool.project-paths]\nx = \"x\"\n");
        let mut cache = RegistryCache::new();

        let first = cache.get_or_build(&one, &Settings::default()).unwrap();
        let second = cache.get_or_build(&one, &Settings::default()).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_locations_are_cached_separately() {
        let (_temp_dir, _config, one, two) = create_project("[tool.project-paths]\nx = \"x\"\n");
        let mut cache = RegistryCache::new();

        let a = cache.get_or_build(&one, &Settings::default()).unwrap();
        let b = cache.get_or_build(&two, &Settings::default()).unwrap();

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a.config_path(), b.config_path());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_invalidate_rebuilds_from_disk() {
        let (_temp_dir, config, one, two) = create_project("[tool.project-paths]\nx = \"x\"\n");
        let mut cache = RegistryCache::new();
        cache.get_or_build(&one, &Settings::default()).unwrap();
        cache.get_or_build(&two, &Settings::default()).unwrap();

        fs::write(&config, "[tool.project-paths]\nx = \"x\"\ny = \"y\"\n").unwrap();
        // Stale until invalidated
        assert_eq!(cache.get_or_build(&one, &Settings::default()).unwrap().len(), 1);

        assert_eq!(cache.invalidate(&config), 2);
        assert!(cache.is_empty());
        assert_eq!(cache.get_or_build(&one, &Settings::default()).unwrap().len(), 2);
    }

    #[test]
    fn test_invalidate_other_file_keeps_entries() {
        let (temp_dir, _config, one, _) = create_project("[tool.project-paths]\n");
        let mut cache = RegistryCache::new();
        cache.get_or_build(&one, &Settings::default()).unwrap();

        assert_eq!(cache.invalidate(&temp_dir.path().join("other.toml")), 0);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_failures_are_not_cached() {
        let (_temp_dir, config, one, _) = create_project("[project]\nname = \"demo\"\n");
        let mut cache = RegistryCache::new();

        let err = cache.get_or_build(&one, &Settings::default()).unwrap_err();
        assert!(err.is_not_found());
        assert!(cache.is_empty());

        fs::write(&config, "[tool.project-paths]\nx = \"x\"\n").unwrap();
        assert_eq!(cache.get_or_build(&one, &Settings::default()).unwrap().len(), 1);
    }

    #[test]
    fn test_settings_are_part_of_the_key() {
        let (_temp_dir, _config, one, _) =
            create_project("[tool.project-paths]\nx = \"x\"\n[tool.other]\ny = \"y\"\nz = \"z\"\n");
        let mut cache = RegistryCache::new();
        let other = Settings::default().with_table("tool.other").unwrap();

        assert_eq!(cache.get_or_build(&one, &Settings::default()).unwrap().len(), 1);
        assert_eq!(cache.get_or_build(&one, &other).unwrap().len(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_clear() {
        let (_temp_dir, _config, one, two) = create_project("[tool.project-paths]\n");
        let mut cache = RegistryCache::new();
        cache.get_or_build(&one, &Settings::default()).unwrap();
        cache.get_or_build(&two, &Settings::default()).unwrap();

        cache.clear();
        assert!(cache.is_empty());
    }
}
