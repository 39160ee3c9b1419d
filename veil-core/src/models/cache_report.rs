use serde::{Deserialize, Serialize};

/// Result of clearing the placeholder store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheClearReport {
    pub cleared_count: usize,
}
