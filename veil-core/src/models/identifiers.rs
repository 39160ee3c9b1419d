use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A message record with its identifier fields replaced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnonymizedMessage {
    pub anonymized_message: Map<String, Value>,
    /// Field names that were replaced, identifier fields first, then composite keys.
    pub anonymizations_performed: Vec<String>,
}
