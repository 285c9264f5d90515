//! Versioned key-value cache for fetched `GeoJSON`.
//!
//! Entries expire after a fixed TTL or when the data version changes.
//! [`Cache`] never surfaces backend failures: a failed read is a miss and a
//! failed write is dropped, both logged at `warn`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;

/// Days an entry stays fresh.
pub const CACHE_TTL_DAYS: i64 = 7;

/// Version stamped on new entries; older versions are ignored.
pub const DATA_VERSION: &str = "2.1.0";

/// Errors raised by a cache backend.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// I/O error (file read/write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Lookup key.
    pub key: String,
    /// Cached payload.
    pub data: Value,
    /// When the entry was written.
    pub timestamp: DateTime<Utc>,
    /// Data version at write time.
    pub version: String,
}

/// Storage behind a [`Cache`].
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Reads the entry stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the backend cannot be read.
    async fn read(&self, key: &str) -> Result<Option<CacheEntry>, CacheError>;

    /// Stores `entry`, replacing any entry with the same key.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the backend cannot be written.
    async fn write(&self, entry: &CacheEntry) -> Result<(), CacheError>;

    /// Every stored entry.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the backend cannot be read.
    async fn entries(&self) -> Result<Vec<CacheEntry>, CacheError>;

    /// Removes every entry.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the backend cannot be written.
    async fn clear(&self) -> Result<(), CacheError>;
}

/// In-process backend.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<BTreeMap<String, CacheEntry>>,
}

impl MemoryCache {
    /// Creates an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn read(&self, key: &str) -> Result<Option<CacheEntry>, CacheError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn write(&self, entry: &CacheEntry) -> Result<(), CacheError> {
        self.entries
            .write()
            .await
            .insert(entry.key.clone(), entry.clone());
        Ok(())
    }

    async fn entries(&self) -> Result<Vec<CacheEntry>, CacheError> {
        Ok(self.entries.read().await.values().cloned().collect())
    }

    async fn clear(&self) -> Result<(), CacheError> {
        self.entries.write().await.clear();
        Ok(())
    }
}

/// Directory backend storing one JSON file per key.
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    /// Creates a backend rooted at `dir`. The directory is created on the
    /// first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the entries.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{name}.json"))
    }

    async fn read_entry(path: &Path) -> Result<Option<CacheEntry>, CacheError> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl CacheBackend for FileCache {
    async fn read(&self, key: &str) -> Result<Option<CacheEntry>, CacheError> {
        let entry = Self::read_entry(&self.path_for(key)).await?;
        // Distinct keys may share a sanitized file name.
        Ok(entry.filter(|entry| entry.key == key))
    }

    async fn write(&self, entry: &CacheEntry) -> Result<(), CacheError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let bytes = serde_json::to_vec(entry)?;
        tokio::fs::write(self.path_for(&entry.key), bytes).await?;
        Ok(())
    }

    async fn entries(&self) -> Result<Vec<CacheEntry>, CacheError> {
        let mut dir = match tokio::fs::read_dir(&self.dir).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        while let Some(item) = dir.next_entry().await? {
            let path = item.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            match Self::read_entry(&path).await {
                Ok(Some(entry)) => entries.push(entry),
                Ok(None) => {}
                Err(e) => log::warn!("Skipping unreadable cache file {}: {e}", path.display()),
            }
        }
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(entries)
    }

    async fn clear(&self) -> Result<(), CacheError> {
        for entry in self.entries().await? {
            tokio::fs::remove_file(self.path_for(&entry.key)).await?;
        }
        Ok(())
    }
}

/// Summary of one cached entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheItem {
    /// Lookup key.
    pub key: String,
    /// When it was written.
    pub timestamp: DateTime<Utc>,
    /// Whole days since it was written.
    pub age_days: i64,
    /// Whether a lookup would still return it.
    pub fresh: bool,
}

/// Summary of the whole cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Whether the backend could be read.
    pub enabled: bool,
    /// Number of stored entries.
    pub item_count: usize,
    /// Approximate serialized size in KiB.
    pub total_size_kb: usize,
    /// Current data version.
    pub version: String,
    /// Per-entry details, by key.
    pub items: Vec<CacheItem>,
}

/// TTL- and version-checked cache over a [`CacheBackend`].
pub struct Cache {
    backend: Box<dyn CacheBackend>,
    ttl: Duration,
    version: String,
}

impl Cache {
    /// Creates a cache with the default TTL and data version.
    #[must_use]
    pub fn new(backend: Box<dyn CacheBackend>) -> Self {
        Self {
            backend,
            ttl: Duration::days(CACHE_TTL_DAYS),
            version: DATA_VERSION.to_string(),
        }
    }

    /// Overrides the entry lifetime.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Overrides the data version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    fn is_fresh(&self, entry: &CacheEntry, now: DateTime<Utc>) -> bool {
        entry.version == self.version && now - entry.timestamp <= self.ttl
    }

    /// Cached data for `key`, or `None` on a miss, an expired or outdated
    /// entry, or a backend failure.
    pub async fn get(&self, key: &str) -> Option<Value> {
        let entry = match self.backend.read(key).await {
            Ok(Some(entry)) => entry,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Cache read error for {key}: {e}");
                return None;
            }
        };

        if entry.version != self.version {
            log::info!("Cache invalidated for {key}: version mismatch");
            return None;
        }
        if !self.is_fresh(&entry, Utc::now()) {
            log::info!(
                "Cache expired for {key}: {} days old",
                (Utc::now() - entry.timestamp).num_days()
            );
            return None;
        }

        log::debug!("Cache hit: {key}");
        Some(entry.data)
    }

    /// Stores `data` under `key`, stamped with the current time and version.
    ///
    /// Failures are logged and dropped.
    pub async fn put(&self, key: &str, data: Value) {
        let entry = CacheEntry {
            key: key.to_string(),
            data,
            timestamp: Utc::now(),
            version: self.version.clone(),
        };
        match self.backend.write(&entry).await {
            Ok(()) => log::debug!("Cached: {key}"),
            Err(e) => log::warn!("Cache write error for {key}: {e}"),
        }
    }

    /// Removes every entry. Failures are logged and dropped.
    pub async fn clear(&self) {
        match self.backend.clear().await {
            Ok(()) => log::info!("Cache cleared"),
            Err(e) => log::warn!("Failed to clear cache: {e}"),
        }
    }

    /// Entry count, size and per-entry ages.
    pub async fn stats(&self) -> CacheStats {
        let entries = match self.backend.entries().await {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Failed to read cache: {e}");
                return CacheStats {
                    enabled: false,
                    item_count: 0,
                    total_size_kb: 0,
                    version: self.version.clone(),
                    items: Vec::new(),
                };
            }
        };

        let now = Utc::now();
        let total_size: usize = entries
            .iter()
            .map(|entry| serde_json::to_vec(entry).map_or(0, |bytes| bytes.len()))
            .sum();

        CacheStats {
            enabled: true,
            item_count: entries.len(),
            total_size_kb: total_size.div_ceil(1024),
            version: self.version.clone(),
            items: entries
                .iter()
                .map(|entry| CacheItem {
                    key: entry.key.clone(),
                    timestamp: entry.timestamp,
                    age_days: (now - entry.timestamp).num_days(),
                    fresh: self.is_fresh(entry, now),
                })
                .collect(),
        }
    }
}
