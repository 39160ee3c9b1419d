use serde::{Deserialize, Serialize};

/// Analysis category of a feedback item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    UserExperience,
    ResponseQuality,
    TechnicalAccuracy,
    Communication,
    Efficiency,
    Completeness,
    Tone,
    Other,
}

impl FeedbackCategory {
    pub const ALL: [FeedbackCategory; 8] = [
        Self::UserExperience,
        Self::ResponseQuality,
        Self::TechnicalAccuracy,
        Self::Communication,
        Self::Efficiency,
        Self::Completeness,
        Self::Tone,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserExperience => "user_experience",
            Self::ResponseQuality => "response_quality",
            Self::TechnicalAccuracy => "technical_accuracy",
            Self::Communication => "communication",
            Self::Efficiency => "efficiency",
            Self::Completeness => "completeness",
            Self::Tone => "tone",
            Self::Other => "other",
        }
    }

    /// Case-insensitive lookup; unknown labels fall back to `Other`.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == label)
            .unwrap_or(Self::Other)
    }
}

/// Severity of a feedback item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Case-insensitive lookup; unknown labels fall back to `Medium`.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            "critical" => Self::Critical,
            _ => Self::Medium,
        }
    }
}

/// One structured observation for the analysis report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub category: FeedbackCategory,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
}
