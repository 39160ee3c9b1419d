//! Salted, hash-derived placeholder generation.

use std::sync::Arc;

use sha2::{Digest, Sha256};

use veil_core::config::defaults::DEFAULT_DIGEST_LENGTH;
use veil_core::constants::{MAX_DIGEST_LENGTH, MIN_DIGEST_LENGTH};
use veil_core::models::{CacheClearReport, PlaceholderKey};
use veil_core::traits::IPlaceholderStore;

use crate::cache::PlaceholderCache;

/// Produces `[CATEGORY_digest]` placeholders, memoized in a shared store.
///
/// The digest is the leading hex of SHA-256 over `salt || original`. The
/// category is not hashed: it is embedded, uppercased, as the prefix.
/// Generators sharing a store should share a digest length too, since a
/// cached placeholder is returned as-is.
#[derive(Clone)]
pub struct PlaceholderGenerator {
    store: Arc<dyn IPlaceholderStore>,
    digest_length: usize,
}

impl PlaceholderGenerator {
    /// Generator over a fresh private cache.
    pub fn new() -> Self {
        Self::with_store(Arc::new(PlaceholderCache::new()))
    }

    /// Generator over an existing store.
    pub fn with_store(store: Arc<dyn IPlaceholderStore>) -> Self {
        Self {
            store,
            digest_length: DEFAULT_DIGEST_LENGTH,
        }
    }

    /// Set the digest width, clamped to the supported range.
    pub fn with_digest_length(mut self, digest_length: usize) -> Self {
        self.digest_length = digest_length.clamp(MIN_DIGEST_LENGTH, MAX_DIGEST_LENGTH);
        self
    }

    pub fn digest_length(&self) -> usize {
        self.digest_length
    }

    pub fn store(&self) -> &Arc<dyn IPlaceholderStore> {
        &self.store
    }

    /// Placeholder for `original` under `category` and `salt`.
    /// Cached on first use; never fails, including for empty input.
    pub fn generate(&self, original: &str, category: &str, salt: &str) -> String {
        let key = PlaceholderKey::new(category, original);
        self.store.get_or_insert_with(salt, key, &|| {
            compute_placeholder(original, category, salt, self.digest_length)
        })
    }

    /// Forget every cached placeholder.
    pub fn clear(&self) -> CacheClearReport {
        CacheClearReport {
            cleared_count: self.store.clear(),
        }
    }
}

impl Default for PlaceholderGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Uncached placeholder computation.
pub fn compute_placeholder(original: &str, category: &str, salt: &str, digest_length: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(original.as_bytes());
    let digest = hex::encode(hasher.finalize());
    let width = digest_length.min(digest.len());
    format!("[{}_{}]", category.to_uppercase(), &digest[..width])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_shape() {
        let p = compute_placeholder("John Smith", "person_name", "", 8);
        assert!(p.starts_with("[PERSON_NAME_"), "{p}");
        assert!(p.ends_with(']'));
        let digest = &p["[PERSON_NAME_".len()..p.len() - 1];
        assert_eq!(digest.len(), 8);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn empty_original_is_legal() {
        // sha256("") = e3b0c442...
        assert_eq!(compute_placeholder("", "custom_id", "", 8), "[CUSTOM_ID_e3b0c442]");
    }

    #[test]
    fn salt_is_prepended_to_original() {
        assert_eq!(
            compute_placeholder("bc", "x", "a", 8),
            compute_placeholder("abc", "x", "", 8)
        );
    }

    #[test]
    fn digest_length_is_clamped() {
        let g = PlaceholderGenerator::new().with_digest_length(2);
        assert_eq!(g.digest_length(), 8);
        let g = PlaceholderGenerator::new().with_digest_length(1000);
        assert_eq!(g.digest_length(), 64);
        let p = g.generate("v", "c", "");
        assert_eq!(p.len(), "[C_]".len() + 64);
    }
}
