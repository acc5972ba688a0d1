// crates/urbanpulse-core/src/loader/cache.rs

//! Explicit, process-wide memoization of loaded datasets.
//!
//! The cache is keyed by source and loader settings. Entries live until the
//! [`CachePolicy`] expires them or someone calls [`DatasetCache::invalidate`].
//! Reads share an `Arc<Dataset>`, so many sessions can hold the same table
//! without copying it.

use super::{load, LoadOutcome, LoaderConfig};
use crate::error::LoadError;
use crate::model::Dataset;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

static DATASET_CACHE: Lazy<DatasetCache> = Lazy::new(|| DatasetCache::new(CachePolicy::Forever));

/// The cache used by [`super::load_or_empty`].
pub fn global() -> &'static DatasetCache {
    &DATASET_CACHE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Keep entries for the lifetime of the process.
    Forever,
    /// Reload entries older than the given age.
    Ttl(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub source: String,
    pub min_population: u64,
    pub max_records: usize,
}

impl From<&LoaderConfig> for CacheKey {
    fn from(config: &LoaderConfig) -> Self {
        Self {
            source: config.source.to_string(),
            min_population: config.min_population,
            max_records: config.max_records,
        }
    }
}

struct Entry {
    dataset: Arc<Dataset>,
    loaded_at: Instant,
}

pub struct DatasetCache {
    policy: CachePolicy,
    entries: RwLock<HashMap<CacheKey, Entry>>,
}

impl DatasetCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the cached dataset for `key` if it has not expired.
    pub fn get(&self, key: &CacheKey) -> Option<Arc<Dataset>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(key)
            .filter(|entry| !self.is_expired(entry))
            .map(|entry| Arc::clone(&entry.dataset))
    }

    /// Cached lookup, loading on a miss. Errors are returned, not cached.
    pub fn get_or_load(&self, config: &LoaderConfig) -> Result<Arc<Dataset>, LoadError> {
        let key = CacheKey::from(config);
        if let Some(dataset) = self.get(&key) {
            tracing::debug!(source = %key.source, "dataset cache hit");
            return Ok(dataset);
        }

        tracing::debug!(source = %key.source, "dataset cache miss");
        let dataset = Arc::new(load(config)?);
        self.insert(key, Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Like [`Self::get_or_load`], but a failure becomes an empty dataset
    /// plus the error.
    pub fn load_or_empty(&self, config: &LoaderConfig) -> LoadOutcome {
        match self.get_or_load(config) {
            Ok(dataset) => LoadOutcome {
                dataset,
                error: None,
            },
            Err(error) => {
                tracing::warn!(source = %config.source, %error, "dataset unavailable");
                LoadOutcome {
                    dataset: Arc::new(Dataset::empty()),
                    error: Some(error),
                }
            }
        }
    }

    pub fn insert(&self, key: CacheKey, dataset: Arc<Dataset>) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(
            key,
            Entry {
                dataset,
                loaded_at: Instant::now(),
            },
        );
    }

    /// Drops one entry. Returns whether it was present.
    pub fn invalidate(&self, key: &CacheKey) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key).is_some()
    }

    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.clear();
    }

    fn is_expired(&self, entry: &Entry) -> bool {
        match self.policy {
            CachePolicy::Forever => false,
            CachePolicy::Ttl(ttl) => entry.loaded_at.elapsed() > ttl,
        }
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new(CachePolicy::Forever)
    }
}
