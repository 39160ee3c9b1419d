//! Error handling for Veil.
//! One error enum per subsystem, `thiserror` only.

pub mod anonymize_error;
pub mod config_error;
pub mod error_code;
pub mod tool_error;
pub mod transcript_error;
pub mod veil_error;

pub use anonymize_error::AnonymizeError;
pub use config_error::ConfigError;
pub use error_code::VeilErrorCode;
pub use tool_error::ToolError;
pub use transcript_error::TranscriptError;
pub use veil_error::{VeilError, VeilResult};
