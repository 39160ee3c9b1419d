use serde::{Deserialize, Serialize};

/// Inner key of the placeholder store. A struct rather than a joined string,
/// so categories or values containing a delimiter cannot collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlaceholderKey {
    pub category: String,
    pub value: String,
}

impl PlaceholderKey {
    pub fn new(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            value: value.into(),
        }
    }
}
