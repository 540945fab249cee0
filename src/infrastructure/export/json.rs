use crate::domain::error::{AppError, Result};
use crate::domain::export::ExportSettings;
use crate::domain::test_case::TestCaseRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};

fn filter_record(record: &TestCaseRecord, settings: &ExportSettings) -> Result<Value> {
    let mut value = serde_json::to_value(record)?;
    let object = value
        .as_object_mut()
        .ok_or_else(|| AppError::ExportError("Test case did not serialize to an object".to_string()))?;

    if !settings.include_steps {
        object.remove("steps");
    }
    if !settings.include_expected_results {
        object.remove("expectedResults");
    }
    if !settings.include_test_data {
        object.remove("testData");
    }
    if !settings.include_preconditions {
        object.remove("preconditions");
    }

    Ok(value)
}

pub fn to_json(
    test_cases: &[TestCaseRecord],
    settings: &ExportSettings,
    project: &str,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let filtered = test_cases
        .iter()
        .map(|record| filter_record(record, settings))
        .collect::<Result<Vec<_>>>()?;

    let document = json!({
        "project": project,
        "generatedAt": generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        "totalTestCases": test_cases.len(),
        "testCases": filtered,
    });

    Ok(serde_json::to_string_pretty(&document)?)
}
