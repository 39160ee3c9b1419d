//! # veil-observability
//!
//! Structured tracing setup driven by `ObservabilityConfig`, and event
//! helpers for tool invocations and anonymization outcomes. Events carry
//! counts, categories and tool names, never original values.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_filter};
