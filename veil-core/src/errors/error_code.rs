//! Stable error codes surfaced in tool envelopes.

pub const INVALID_SHAPE: &str = "INVALID_SHAPE";
pub const INVALID_MESSAGE: &str = "INVALID_MESSAGE";
pub const CONFIG_LOAD: &str = "CONFIG_LOAD";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
pub const UNKNOWN_TOOL: &str = "UNKNOWN_TOOL";
pub const RUNTIME: &str = "RUNTIME";

/// Maps an error to a stable, machine-readable code.
pub trait VeilErrorCode {
    fn error_code(&self) -> &'static str;
}
