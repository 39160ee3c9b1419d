use super::error_code::{self, VeilErrorCode};

/// Transcript helper errors.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("messages must be a list, got {found}")]
    NotAList { found: String },

    #[error("message {index} is invalid: {reason}")]
    InvalidMessage { index: usize, reason: String },
}

impl VeilErrorCode for TranscriptError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotAList { .. } => error_code::INVALID_SHAPE,
            Self::InvalidMessage { .. } => error_code::INVALID_MESSAGE,
        }
    }
}
