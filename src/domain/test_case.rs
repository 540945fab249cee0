use crate::domain::analysis::{AnalysisSummary, Priority};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionType {
    #[default]
    Manual,
    Automated,
}

impl ExecutionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionType::Manual => "Manual",
            ExecutionType::Automated => "Automated",
        }
    }
}

pub type TestData = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseRecord {
    pub id: String,
    #[serde(alias = "uuid")]
    pub correlation_id: Uuid,
    pub summary: String,
    pub description: String,
    pub test_type: ExecutionType,
    pub priority: Priority,
    pub component: String,
    pub labels: Vec<String>,
    pub preconditions: Vec<String>,
    pub steps: Vec<String>,
    pub expected_results: Vec<String>,
    pub test_data: TestData,
    pub estimated_time: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automation_potential: Option<String>,
}

/// Formats a 1-based sequence number as a test case id.
///
/// Pads to three digits and widens past `TC_999` instead of wrapping.
pub fn format_test_case_id(seq: usize) -> String {
    format!("TC_{:03}", seq)
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOutcome {
    pub test_cases: Vec<TestCaseRecord>,
    pub analysis: AnalysisSummary,
    pub ai_generated: bool,
}
