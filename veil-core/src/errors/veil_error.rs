use super::{AnonymizeError, ConfigError, ToolError, TranscriptError, VeilErrorCode};

/// Top-level error. Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum VeilError {
    #[error("anonymize error: {0}")]
    Anonymize(#[from] AnonymizeError),

    #[error("transcript error: {0}")]
    Transcript(#[from] TranscriptError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("tool error: {0}")]
    Tool(#[from] ToolError),
}

impl VeilErrorCode for VeilError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Anonymize(e) => e.error_code(),
            Self::Transcript(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Tool(e) => e.error_code(),
        }
    }
}

impl VeilError {
    /// The innermost message, without the subsystem prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Anonymize(e) => e.to_string(),
            Self::Transcript(e) => e.to_string(),
            Self::Config(e) => e.to_string(),
            Self::Tool(e) => e.to_string(),
        }
    }
}

pub type VeilResult<T> = Result<T, VeilError>;
