//! Shared `package.json` data cache.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

/// Parsed `package.json` of one package directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageData {
    /// Directory containing the `package.json`.
    pub dir: PathBuf,
    /// `name` field.
    #[serde(default)]
    pub name: Option<String>,
    /// `version` field.
    #[serde(default)]
    pub version: Option<String>,
    /// The raw document.
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Cache of package data keyed by cache key (usually the package directory).
///
/// Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct PackageCache {
    entries: Arc<DashMap<String, Arc<PackageData>>>,
}

impl PackageCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets cached data.
    pub fn get(&self, key: &str) -> Option<Arc<PackageData>> {
        self.entries.get(key).map(|entry| Arc::clone(entry.value()))
    }

    /// Stores data under a key.
    pub fn insert(&self, key: impl Into<String>, data: PackageData) {
        self.entries.insert(key.into(), Arc::new(data));
    }

    /// Drops every entry whose package lives in `dir`. Returns the number of
    /// removed entries.
    pub fn invalidate_dir(&self, dir: &Path) -> usize {
        let mut removed = 0;
        self.entries.retain(|_, data| {
            let keep = data.dir != dir;
            if !keep {
                removed += 1;
            }
            keep
        });
        removed
    }

    /// Number of cached packages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
