pub mod pii;

pub use pii::{all_patterns, patterns_for, PiiPattern};
