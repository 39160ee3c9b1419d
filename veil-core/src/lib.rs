//! # veil-core
//!
//! Foundation crate for the Veil de-identification toolkit.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod json;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VeilConfig;
pub use errors::{VeilError, VeilErrorCode, VeilResult};
pub use models::{PiiCategory, SensitiveSpan};
