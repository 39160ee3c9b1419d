//! # veil-tools
//!
//! The tool boundary consumed by an agent or orchestration layer. Every tool
//! takes a JSON object of arguments and returns a JSON object carrying a
//! `status` of `success` or `error`; nothing panics or returns a Rust error
//! across this boundary.
//!
//! ## Architecture
//!
//! - `runtime.rs`: process-wide `VeilRuntime` singleton owning the engine and config
//! - `registry.rs`: tool table, dispatch by name, envelope wrapping
//! - `bindings/`: one handler per tool, grouped by domain
//! - `envelope.rs`: success and error envelopes

pub mod bindings;
pub mod envelope;
pub mod registry;
pub mod runtime;

pub use registry::{call_tool, ToolRegistry, ToolSpec};
pub use runtime::{RuntimeOptions, VeilRuntime};
