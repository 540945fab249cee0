use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::error::AppError;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
    Gherkin,
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json; charset=utf-8",
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Gherkin => "text/plain; charset=utf-8",
        }
    }

    pub fn file_name(&self, date: chrono::NaiveDate) -> String {
        let day = date.format("%Y-%m-%d");
        match self {
            ExportFormat::Json => format!("xray-test-cases-{}.json", day),
            ExportFormat::Csv => format!("xray-test-cases-{}.csv", day),
            ExportFormat::Gherkin => format!("test-scenarios-{}.feature", day),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "gherkin" | "feature" => Ok(ExportFormat::Gherkin),
            other => Err(AppError::ValidationError(format!(
                "Unsupported export format: {}",
                other
            ))),
        }
    }
}

/// Field toggles applied by every exporter.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportSettings {
    pub include_steps: bool,
    pub include_expected_results: bool,
    pub include_test_data: bool,
    pub include_preconditions: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            include_steps: true,
            include_expected_results: true,
            include_test_data: true,
            include_preconditions: true,
        }
    }
}
