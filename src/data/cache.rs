use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use super::loader::{load_records, LoadError};
use super::types::EmployeeRecord;

/// A loaded table, shared immutably between the cache and its readers.
pub type SharedTable = Arc<Vec<EmployeeRecord>>;

/// Cache of loaded tables keyed by source identity (the file path).
///
/// Entries are immutable once stored; a hit returns the same `Arc` that
/// was populated, so concurrent readers never observe in-place mutation.
/// Injectable so tests can stub it and one-shot runs can bypass it.
pub trait TableCache: Send + Sync {
    fn get(&self, key: &str) -> Option<SharedTable>;
    fn store(&self, key: &str, table: SharedTable);
}

/// In-memory cache for embedding callers that re-render repeatedly.
#[derive(Clone, Default)]
pub struct MemoryCache {
    inner: Arc<Mutex<HashMap<String, SharedTable>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TableCache for MemoryCache {
    fn get(&self, key: &str) -> Option<SharedTable> {
        let data = self.inner.lock().unwrap();
        data.get(key).cloned()
    }

    fn store(&self, key: &str, table: SharedTable) {
        let mut data = self.inner.lock().unwrap();
        data.insert(key.to_string(), table);
    }
}

/// Cache that never hits. Every load goes to the source.
pub struct NoCache;

impl TableCache for NoCache {
    fn get(&self, _key: &str) -> Option<SharedTable> {
        None
    }

    fn store(&self, _key: &str, _table: SharedTable) {}
}

/// Read-through load: return the cached table for this source if present,
/// otherwise load from disk and populate the cache.
pub fn load_cached(cache: &dyn TableCache, path: &Path) -> Result<SharedTable, LoadError> {
    let key = path.to_string_lossy();
    if let Some(table) = cache.get(&key) {
        return Ok(table);
    }

    let table: SharedTable = Arc::new(load_records(path)?);
    cache.store(&key, Arc::clone(&table));
    Ok(table)
}
