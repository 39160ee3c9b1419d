mod placeholder_store;
mod text_anonymizer;

pub use placeholder_store::IPlaceholderStore;
pub use text_anonymizer::ITextAnonymizer;
