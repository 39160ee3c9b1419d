use crate::models::PlaceholderKey;

/// Two-level placeholder storage: salt → (category, value) → placeholder.
///
/// Implementations must make `get_or_insert_with` and `clear` atomic with
/// respect to each other so the same key under the same salt never maps to
/// two placeholders.
pub trait IPlaceholderStore: Send + Sync {
    /// Look up a cached placeholder.
    fn get(&self, salt: &str, key: &PlaceholderKey) -> Option<String>;

    /// Store a placeholder, creating the salt bucket if needed.
    fn put(&self, salt: &str, key: PlaceholderKey, placeholder: String);

    /// Return the cached placeholder or compute, store and return a new one.
    fn get_or_insert_with(
        &self,
        salt: &str,
        key: PlaceholderKey,
        make: &dyn Fn() -> String,
    ) -> String;

    /// Total entries across all salts.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry and return how many there were.
    fn clear(&self) -> usize;
}
