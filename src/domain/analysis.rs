use crate::domain::lenient;
use serde::{Deserialize, Serialize};
use std::fmt;

/// UI element kind used as the key into the keyword and scenario catalogue.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TestType {
    Functional,
    Ui,
    Validation,
    Accessibility,
    Performance,
    Negative,
}

impl TestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::Functional => "functional",
            TestType::Ui => "ui",
            TestType::Validation => "validation",
            TestType::Accessibility => "accessibility",
            TestType::Performance => "performance",
            TestType::Negative => "negative",
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    User,
    Admin,
}

/// Structured reading of a free-text description.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub components: Vec<CategoryId>,
    pub test_types: Vec<TestType>,
    pub priority: Priority,
    pub user_type: UserType,
    pub page_type: Option<String>,
    pub detected_components: Vec<CategoryId>,
}

impl AnalysisResult {
    /// Attaches a page type classified from the uploaded file name.
    pub fn with_page_type(mut self, page_type: Option<String>) -> Self {
        self.page_type = page_type;
        self
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    pub category: CategoryId,
    pub display_name: String,
    pub scenarios: Vec<String>,
}

/// Display-only analysis payload returned next to generated test cases.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisSummary {
    #[serde(deserialize_with = "lenient::text_list")]
    pub detected_components: Vec<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub page_type: Option<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub user_interactions: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub data_fields: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub validation_points: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub suggestions: Vec<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub complexity: Option<String>,
    pub estimated_test_count: Option<serde_json::Value>,
}
