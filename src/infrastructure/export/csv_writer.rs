use crate::domain::error::{AppError, Result};
use crate::domain::export::ExportSettings;
use crate::domain::test_case::TestCaseRecord;
use csv::{Terminator, WriterBuilder};

pub const CSV_HEADERS: [&str; 11] = [
    "Test Case ID",
    "Summary",
    "Priority",
    "Test Type",
    "Component",
    "Labels",
    "Preconditions",
    "Test Steps",
    "Expected Results",
    "Test Data",
    "Estimated Time",
];

fn row(record: &TestCaseRecord, settings: &ExportSettings) -> Result<Vec<String>> {
    let joined_or_empty = |include: bool, items: &[String]| {
        if include {
            items.join("; ")
        } else {
            String::new()
        }
    };

    let test_data = if settings.include_test_data {
        serde_json::to_string(&record.test_data)?
    } else {
        String::new()
    };

    Ok(vec![
        record.id.clone(),
        record.summary.clone(),
        record.priority.to_string(),
        record.test_type.as_str().to_string(),
        record.component.clone(),
        record.labels.join(", "),
        joined_or_empty(settings.include_preconditions, &record.preconditions),
        joined_or_empty(settings.include_steps, &record.steps),
        joined_or_empty(settings.include_expected_results, &record.expected_results),
        test_data,
        record.estimated_time.clone(),
    ])
}

/// RFC 4180 CSV: fields with separators or quotes are quoted, quotes doubled.
pub fn to_csv(test_cases: &[TestCaseRecord], settings: &ExportSettings) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let map_err = |e: csv::Error| AppError::ExportError(format!("CSV write failed: {}", e));

    writer.write_record(CSV_HEADERS).map_err(map_err)?;
    for record in test_cases {
        writer.write_record(row(record, settings)?).map_err(map_err)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::ExportError(format!("CSV flush failed: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| AppError::ExportError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::export::fixtures::record;
    use serde_json::json;

    #[test]
    fn test_header_has_eleven_columns() {
        let body = to_csv(&[], &ExportSettings::default()).unwrap();
        assert_eq!(
            body.trim_end(),
            "Test Case ID,Summary,Priority,Test Type,Component,Labels,Preconditions,Test Steps,Expected Results,Test Data,Estimated Time"
        );
    }

    #[test]
    fn test_list_fields_are_joined() {
        let body = to_csv(&[record("TC_001", "Form - Submit")], &ExportSettings::default()).unwrap();
        let line = body.lines().nth(1).unwrap();
        assert!(line.starts_with("TC_001,Form - Submit,High,Manual,Form,"));
        assert!(line.contains("\"functional, form\""));
        assert!(line.contains("Formu doldur; Kaydet"));
    }

    #[test]
    fn test_test_data_quotes_are_doubled() {
        let mut case = record("TC_001", "A");
        case.test_data
            .insert("note".to_string(), json!("say \"hi\""));
        let body = to_csv(&[case], &ExportSettings::default()).unwrap();

        assert!(body.contains(r#""note"":""say \""hi\"""","#));
        let mut reader = csv::Reader::from_reader(body.as_bytes());
        let row = reader.records().next().unwrap().unwrap();
        let data: serde_json::Value = serde_json::from_str(&row[9]).unwrap();
        assert_eq!(data["note"], "say \"hi\"");
    }

    #[test]
    fn test_excluded_fields_are_empty_cells() {
        let settings = ExportSettings {
            include_steps: false,
            include_preconditions: false,
            ..Default::default()
        };
        let body = to_csv(&[record("TC_001", "A")], &settings).unwrap();
        let mut reader = csv::Reader::from_reader(body.as_bytes());
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[6], "");
        assert_eq!(&row[7], "");
        assert_eq!(&row[8], "Kayıt oluşur");
    }
}
