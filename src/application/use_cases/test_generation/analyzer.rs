//! Keyword analysis of the free-text description.
//!
//! Matching is case-insensitive substring search, so a keyword embedded in an
//! unrelated word still counts as a hit.

use super::catalogue::{
    ADMIN_WORDS, CATEGORIES, DEFAULT_TEST_TYPES, HIGH_PRIORITY_WORDS, LOW_PRIORITY_WORDS,
    PAGE_RULES, TEST_TYPE_KEYWORDS,
};
use crate::domain::analysis::{AnalysisResult, CategoryId, Priority, UserType};

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

pub fn analyze_description(description: &str, role_hint: Option<UserType>) -> AnalysisResult {
    let lower = description.to_lowercase();

    let components: Vec<CategoryId> = CATEGORIES
        .iter()
        .filter(|entry| contains_any(&lower, entry.keywords))
        .map(|entry| CategoryId::from(entry.id))
        .collect();

    let mut test_types: Vec<_> = TEST_TYPE_KEYWORDS
        .iter()
        .filter(|(_, keywords)| contains_any(&lower, keywords))
        .map(|(test_type, _)| *test_type)
        .collect();
    if test_types.is_empty() {
        test_types = DEFAULT_TEST_TYPES.to_vec();
    }

    let priority = if contains_any(&lower, HIGH_PRIORITY_WORDS) {
        Priority::High
    } else if contains_any(&lower, LOW_PRIORITY_WORDS) {
        Priority::Low
    } else {
        Priority::Medium
    };

    let user_type = role_hint.unwrap_or(if contains_any(&lower, ADMIN_WORDS) {
        UserType::Admin
    } else {
        UserType::User
    });

    AnalysisResult {
        detected_components: components.clone(),
        components,
        test_types,
        priority,
        user_type,
        page_type: None,
    }
}

/// Coarse page classification from the uploaded file name.
pub fn classify_page(file_name: Option<&str>) -> Option<String> {
    let lower = file_name?.to_lowercase();
    PAGE_RULES
        .iter()
        .find(|rule| lower.contains(rule.pattern))
        .map(|rule| rule.page_type.to_string())
}
