//! PlaceholderCache: in-memory, lock-guarded consistency cache.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use veil_core::models::PlaceholderKey;
use veil_core::traits::IPlaceholderStore;

type SaltBucket = HashMap<PlaceholderKey, String>;

/// Two-level map salt → (category, value) → placeholder behind a single `Mutex`.
///
/// Salt buckets are created lazily on first insert. Nothing is persisted.
#[derive(Debug, Default)]
pub struct PlaceholderCache {
    buckets: Mutex<HashMap<String, SaltBucket>>,
}

impl PlaceholderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of salts with at least one entry.
    pub fn salt_count(&self) -> usize {
        self.lock().len()
    }

    /// Entries cached under one salt.
    pub fn bucket_len(&self, salt: &str) -> usize {
        self.lock().get(salt).map_or(0, HashMap::len)
    }

    // Entries are pure-function outputs, so a poisoned map is still valid.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, SaltBucket>> {
        self.buckets.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl IPlaceholderStore for PlaceholderCache {
    fn get(&self, salt: &str, key: &PlaceholderKey) -> Option<String> {
        self.lock().get(salt)?.get(key).cloned()
    }

    fn put(&self, salt: &str, key: PlaceholderKey, placeholder: String) {
        self.lock()
            .entry(salt.to_string())
            .or_default()
            .insert(key, placeholder);
    }

    fn get_or_insert_with(
        &self,
        salt: &str,
        key: PlaceholderKey,
        make: &dyn Fn() -> String,
    ) -> String {
        let mut buckets = self.lock();
        if let Some(existing) = buckets.get(salt).and_then(|b| b.get(&key)) {
            return existing.clone();
        }
        let placeholder = make();
        buckets
            .entry(salt.to_string())
            .or_default()
            .insert(key, placeholder.clone());
        placeholder
    }

    fn len(&self) -> usize {
        self.lock().values().map(HashMap::len).sum()
    }

    fn clear(&self) -> usize {
        let mut buckets = self.lock();
        let count = buckets.values().map(HashMap::len).sum();
        buckets.clear();
        count
    }
}
