mod cache_report;
mod conversation;
mod detection;
mod feedback;
mod identifiers;
mod placeholder_key;
mod replacement;
mod span;
mod text;

pub use cache_report::CacheClearReport;
pub use conversation::{
    AnonymizedConversation, ConversationMetadata, FeedbackSignals, FormattedConversation,
};
pub use detection::{PiiCategory, PiiDetection};
pub use feedback::{FeedbackCategory, FeedbackItem, Severity};
pub use identifiers::AnonymizedMessage;
pub use placeholder_key::PlaceholderKey;
pub use replacement::{Replacement, SpanSubstitution};
pub use span::SensitiveSpan;
pub use text::TextAnonymization;
