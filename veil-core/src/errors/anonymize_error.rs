use super::error_code::{self, VeilErrorCode};

/// Anonymization errors. Everything else in the core is infallible.
#[derive(Debug, thiserror::Error)]
pub enum AnonymizeError {
    #[error("message must be a mapping, got {found}")]
    NotAMapping { found: String },
}

impl VeilErrorCode for AnonymizeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotAMapping { .. } => error_code::INVALID_SHAPE,
        }
    }
}
