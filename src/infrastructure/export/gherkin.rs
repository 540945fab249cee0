use crate::domain::export::ExportSettings;
use crate::domain::test_case::TestCaseRecord;

const FEATURE_HEADER: &str = "Feature: Generated Test Scenarios
  Test case'ler otomatik olarak oluşturulmuştur
  
  Background:
    Given Uygulama test ortamında çalışır durumda
    And Geçerli kullanıcı ile giriş yapılmış
";

fn tag(label: &str) -> String {
    format!("@{}", label.split_whitespace().collect::<Vec<_>>().join("_"))
}

pub fn to_gherkin(test_cases: &[TestCaseRecord], settings: &ExportSettings) -> String {
    let mut body = String::from(FEATURE_HEADER);
    body.push('\n');

    let numbered = test_cases.len() > 1;
    for (index, case) in test_cases.iter().enumerate() {
        let tags: Vec<String> = case.labels.iter().map(|label| tag(label)).collect();
        body.push('\n');
        body.push_str(&format!("  {}\n", tags.join(" ")));
        if numbered {
            body.push_str(&format!("  Scenario {}: {}\n", index + 1, case.summary));
        } else {
            body.push_str(&format!("  Scenario: {}\n", case.summary));
        }

        if settings.include_steps {
            for step in &case.steps {
                body.push_str(&format!("    When {}\n", step));
            }
        }
        if settings.include_expected_results {
            for result in &case.expected_results {
                body.push_str(&format!("    Then {}\n", result));
            }
        }
    }

    body
}
