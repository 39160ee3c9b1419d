use veil_core::models::{FeedbackCategory, FeedbackItem, Severity};

/// Normalize a free-form feedback observation into a `FeedbackItem`.
///
/// Labels are matched case-insensitively; an unknown category becomes
/// `other` and an unknown severity becomes `medium`.
pub fn categorize_feedback(
    category: &str,
    severity: &str,
    description: &str,
    recommendation: &str,
) -> FeedbackItem {
    FeedbackItem {
        category: FeedbackCategory::from_label(category),
        severity: Severity::from_label(severity),
        description: description.to_string(),
        recommendation: recommendation.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_are_case_insensitive() {
        let item = categorize_feedback("Response_Quality", "HIGH", "vague", "be specific");
        assert_eq!(item.category, FeedbackCategory::ResponseQuality);
        assert_eq!(item.severity, Severity::High);
        assert_eq!(item.description, "vague");
        assert_eq!(item.recommendation, "be specific");
    }

    #[test]
    fn unknown_labels_fall_back() {
        let item = categorize_feedback("vibes", "apocalyptic", "", "");
        assert_eq!(item.category, FeedbackCategory::Other);
        assert_eq!(item.severity, Severity::Medium);
    }
}
