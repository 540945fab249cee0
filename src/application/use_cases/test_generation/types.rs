use crate::domain::analysis::{AnalysisSummary, Priority};
use crate::domain::lenient;
use crate::domain::test_case::{format_test_case_id, ExecutionType, TestCaseRecord, TestData};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RemoteOutput {
    pub(crate) test_cases: Vec<RemoteTestCase>,
    #[serde(default, deserialize_with = "null_summary")]
    pub(crate) analysis: AnalysisSummary,
}

fn null_summary<'de, D>(deserializer: D) -> Result<AnalysisSummary, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<AnalysisSummary>::deserialize(deserializer)?.unwrap_or_default())
}

/// Test case as the model returns it. Every field is optional and coerced later;
/// `null` reads as absent and numeric ids or estimates are kept as text.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RemoteTestCase {
    #[serde(deserialize_with = "lenient::optional_text")]
    pub(crate) id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub(crate) summary: String,
    #[serde(deserialize_with = "lenient::text")]
    pub(crate) description: String,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub(crate) test_type: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub(crate) priority: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub(crate) component: String,
    #[serde(deserialize_with = "lenient::text_list")]
    pub(crate) labels: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub(crate) preconditions: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub(crate) steps: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub(crate) expected_results: Vec<String>,
    pub(crate) test_data: serde_json::Value,
    #[serde(deserialize_with = "lenient::text")]
    pub(crate) estimated_time: String,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub(crate) automation_potential: Option<String>,
}

fn coerce_priority(value: Option<&str>) -> Priority {
    match value.map(|v| v.trim().to_lowercase()).as_deref() {
        Some("high") | Some("yüksek") => Priority::High,
        Some("low") | Some("düşük") => Priority::Low,
        _ => Priority::Medium,
    }
}

fn coerce_execution_type(value: Option<&str>) -> ExecutionType {
    match value.map(|v| v.trim().to_lowercase()).as_deref() {
        Some("automated") => ExecutionType::Automated,
        _ => ExecutionType::Manual,
    }
}

fn coerce_test_data(value: serde_json::Value) -> TestData {
    match value {
        serde_json::Value::Object(map) => map,
        serde_json::Value::Null => TestData::new(),
        other => {
            let mut data = TestData::new();
            data.insert("value".to_string(), other);
            data
        }
    }
}

fn non_blank(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

impl RemoteTestCase {
    /// Converts into a record, or `None` when a required list is empty.
    pub(crate) fn into_record(self, index: usize, created_at: DateTime<Utc>) -> Option<TestCaseRecord> {
        let summary = self.summary.trim().to_string();
        let labels = non_blank(self.labels);
        let steps = non_blank(self.steps);
        let expected_results = non_blank(self.expected_results);
        if summary.is_empty() || labels.is_empty() || steps.is_empty() || expected_results.is_empty() {
            return None;
        }

        let id = self
            .id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format_test_case_id(index + 1));

        Some(TestCaseRecord {
            id,
            correlation_id: Uuid::new_v4(),
            summary,
            description: self.description,
            test_type: coerce_execution_type(self.test_type.as_deref()),
            priority: coerce_priority(self.priority.as_deref()),
            component: self.component,
            labels,
            preconditions: non_blank(self.preconditions),
            steps,
            expected_results,
            test_data: coerce_test_data(self.test_data),
            estimated_time: self.estimated_time,
            created_at,
            automation_potential: self.automation_potential,
        })
    }
}
