use super::catalogue::{self, DEFAULT_CATEGORIES, GENERIC_SCENARIO};
use crate::domain::analysis::{AnalysisResult, CategoryId, ComponentDescriptor};

/// Picks the categories to test and expands them through the catalogue.
///
/// A classified page type overrides the detected components. With neither, the
/// default `button` + `form` pair is used.
pub fn resolve_components(analysis: &AnalysisResult) -> Vec<ComponentDescriptor> {
    let page_categories = analysis
        .page_type
        .as_deref()
        .and_then(catalogue::page_categories);

    let categories: Vec<CategoryId> = match page_categories {
        Some(categories) => categories.iter().map(|id| CategoryId::from(*id)).collect(),
        None if !analysis.components.is_empty() => analysis.components.clone(),
        None => DEFAULT_CATEGORIES
            .iter()
            .map(|id| CategoryId::from(*id))
            .collect(),
    };

    categories.into_iter().map(describe).collect()
}

pub fn describe(category: CategoryId) -> ComponentDescriptor {
    match catalogue::category(category.as_str()) {
        Some(entry) => ComponentDescriptor {
            display_name: entry.display_name.to_string(),
            scenarios: entry.scenarios.iter().map(|s| s.to_string()).collect(),
            category,
        },
        None => ComponentDescriptor {
            display_name: category.as_str().to_string(),
            scenarios: vec![GENERIC_SCENARIO.to_string()],
            category,
        },
    }
}
