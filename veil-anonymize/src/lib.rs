//! # veil-anonymize
//!
//! Deterministic de-identification engine.
//! Salted SHA-256 placeholders, a lock-guarded consistency cache,
//! longest-first span substitution, six structured-PII patterns, and
//! identifier-field anonymization for message records.

pub mod cache;
pub mod detector;
pub mod engine;
pub mod identifiers;
pub mod patterns;
pub mod placeholder;
pub mod spans;

pub use cache::PlaceholderCache;
pub use engine::AnonymizationEngine;
pub use placeholder::PlaceholderGenerator;
