// ============================================================
// EXPORT INFRASTRUCTURE LAYER
// ============================================================
// JSON, CSV and Gherkin writers for generated test cases

mod csv_writer;
mod gherkin;
mod json;

use crate::domain::error::Result;
use crate::domain::export::{ExportFormat, ExportSettings};
use crate::domain::test_case::TestCaseRecord;
use chrono::{DateTime, Utc};
use csv_writer::to_csv;
use gherkin::to_gherkin;
use json::to_json;

/// Rendered export, ready to be served as a download.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub file_name: String,
    pub content_type: &'static str,
    pub body: String,
}

pub fn export(
    format: ExportFormat,
    test_cases: &[TestCaseRecord],
    settings: &ExportSettings,
    project: &str,
    generated_at: DateTime<Utc>,
) -> Result<ExportArtifact> {
    let body = match format {
        ExportFormat::Json => to_json(test_cases, settings, project, generated_at)?,
        ExportFormat::Csv => to_csv(test_cases, settings)?,
        ExportFormat::Gherkin => to_gherkin(test_cases, settings),
    };

    Ok(ExportArtifact {
        file_name: format.file_name(generated_at.date_naive()),
        content_type: format.content_type(),
        body,
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_export_file_names() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let cases = vec![fixtures::record("TC_001", "Form - Submit")];
        let settings = ExportSettings::default();

        let json = export(ExportFormat::Json, &cases, &settings, "X-ray Test Cases", now).unwrap();
        assert_eq!(json.file_name, "xray-test-cases-2024-05-01.json");

        let csv = export(ExportFormat::Csv, &cases, &settings, "X-ray Test Cases", now).unwrap();
        assert_eq!(csv.file_name, "xray-test-cases-2024-05-01.csv");
        assert!(csv.content_type.starts_with("text/csv"));

        let feature =
            export(ExportFormat::Gherkin, &cases, &settings, "X-ray Test Cases", now).unwrap();
        assert_eq!(feature.file_name, "test-scenarios-2024-05-01.feature");
    }
}
