use super::error_code::{self, VeilErrorCode};

/// Errors raised at the tool boundary before any subsystem runs.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },

    #[error("runtime already initialized")]
    AlreadyInitialized,
}

impl VeilErrorCode for ToolError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownTool { .. } => error_code::UNKNOWN_TOOL,
            Self::InvalidArguments { .. } => error_code::INVALID_SHAPE,
            Self::AlreadyInitialized => error_code::RUNTIME,
        }
    }
}
