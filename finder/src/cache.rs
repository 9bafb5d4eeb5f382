use common::types::restaurant_record::RestaurantRecord;
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

pub type Dataset = Arc<Vec<RestaurantRecord>>;

/// Hit and miss counters of a cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Memoization of loaded datasets, keyed by source (usually a file path).
pub trait RecordCache: Send + Sync {
    fn get(&self, key: &str) -> Option<Dataset>;

    fn insert(&self, key: &str, records: Dataset);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&self);

    fn stats(&self) -> CacheStats;
}

/// Which cache backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheMode {
    Lru { capacity: NonZeroUsize },
    Disabled,
}

impl CacheMode {
    /// A capacity of zero disables caching.
    pub fn from_capacity(capacity: usize) -> Self {
        match NonZeroUsize::new(capacity) {
            Some(capacity) => CacheMode::Lru { capacity },
            None => CacheMode::Disabled,
        }
    }

    pub fn build(self) -> Box<dyn RecordCache> {
        match self {
            CacheMode::Lru { capacity } => Box::new(LruRecordCache::new(capacity)),
            CacheMode::Disabled => Box::new(NoopCache::default()),
        }
    }
}

/// Bounded in-process cache evicting the least recently used dataset.
pub struct LruRecordCache {
    entries: Mutex<LruCache<String, Dataset>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl LruRecordCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }
}

impl RecordCache for LruRecordCache {
    fn get(&self, key: &str) -> Option<Dataset> {
        let found = self.entries.lock().get(key).cloned();
        match found {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        found
    }

    fn insert(&self, key: &str, records: Dataset) {
        self.entries.lock().put(key.to_string(), records);
    }

    fn len(&self) -> usize {
        self.entries.lock().len()
    }

    fn clear(&self) {
        self.entries.lock().clear();
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

/// Cache that stores nothing; every lookup is a miss.
#[derive(Default)]
pub struct NoopCache {
    misses: AtomicU64,
}

impl RecordCache for NoopCache {
    fn get(&self, _key: &str) -> Option<Dataset> {
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    fn insert(&self, _key: &str, _records: Dataset) {}

    fn len(&self) -> usize {
        0
    }

    fn clear(&self) {}

    fn stats(&self) -> CacheStats {
        CacheStats {
            hits: 0,
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(name: &str) -> Dataset {
        Arc::new(vec![RestaurantRecord::new(name, 48.86, 2.35)])
    }

    #[test]
    fn test_lru_hit_and_miss() {
        let cache = LruRecordCache::new(NonZeroUsize::new(2).unwrap());
        assert!(cache.get("a.geojson").is_none());
        cache.insert("a.geojson", dataset("A"));

        let cached = cache.get("a.geojson").unwrap();
        assert_eq!(cached[0].name, "A");
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
        assert_eq!(cache.stats().hit_rate(), 0.5);
    }

    #[test]
    fn test_lru_evicts_least_recently_used() {
        let cache = LruRecordCache::new(NonZeroUsize::new(2).unwrap());
        cache.insert("a", dataset("A"));
        cache.insert("b", dataset("B"));
        // Touch "a" so "b" becomes the eviction candidate.
        assert!(cache.get("a").is_some());
        cache.insert("c", dataset("C"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("b").is_none());
        assert!(cache.get("a").is_some());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_lru_returns_shared_dataset() {
        let cache = LruRecordCache::new(NonZeroUsize::new(1).unwrap());
        let records = dataset("A");
        cache.insert("a", Arc::clone(&records));
        assert!(Arc::ptr_eq(&cache.get("a").unwrap(), &records));
    }

    #[test]
    fn test_clear_empties_cache() {
        let cache = LruRecordCache::new(NonZeroUsize::new(4).unwrap());
        cache.insert("a", dataset("A"));
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get("a").is_none());
    }

    #[test]
    fn test_noop_never_stores() {
        let cache = NoopCache::default();
        cache.insert("a", dataset("A"));
        assert!(cache.get("a").is_none());
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats { hits: 0, misses: 1 });
    }

    #[test]
    fn test_mode_from_capacity() {
        assert_eq!(CacheMode::from_capacity(0), CacheMode::Disabled);
        assert_eq!(
            CacheMode::from_capacity(3),
            CacheMode::Lru {
                capacity: NonZeroUsize::new(3).unwrap()
            }
        );
        let cache = CacheMode::from_capacity(0).build();
        cache.insert("a", dataset("A"));
        assert!(cache.get("a").is_none());
    }
}
