//! # veil-transcript
//!
//! Deterministic helpers over conversation transcripts in the history
//! message schema: `[ROLE]: content` formatting for summarization,
//! structural metadata for analysis, feedback item normalization, and
//! anonymization of every message through an `ITextAnonymizer`.

pub mod anonymize;
pub mod content;
pub mod feedback;
pub mod format;
pub mod messages;
pub mod metadata;

pub use anonymize::anonymize_conversation;
pub use feedback::categorize_feedback;
pub use format::format_conversation;
pub use metadata::extract_metadata;
