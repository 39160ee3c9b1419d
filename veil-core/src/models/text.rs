use serde::{Deserialize, Serialize};

use super::{PiiCategory, Replacement};

/// Output of the full text pipeline: span substitution followed by PII detection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnonymization {
    pub anonymized_text: String,
    pub replacements: Vec<Replacement>,
    pub detections: Vec<PiiCategory>,
}
