use super::catalogue::{self, Template, GENERIC_TEMPLATE, NAME_PLACEHOLDER, PRIMARY_SCENARIO_MARKER};
use crate::domain::analysis::{AnalysisResult, ComponentDescriptor, Priority, TestType, UserType};
use crate::domain::test_case::{format_test_case_id, ExecutionType, TestCaseRecord, TestData};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

const BASE_MINUTES: usize = 3;

/// Expands every (component, scenario, test type) triple into a record and
/// appends the two fixed edge-case records.
pub fn synthesize(components: &[ComponentDescriptor], analysis: &AnalysisResult) -> Vec<TestCaseRecord> {
    let mut records = Vec::new();
    let mut seq = 1;

    for component in components {
        for scenario in &component.scenarios {
            for test_type in &analysis.test_types {
                records.push(build_record(seq, component, scenario, *test_type, analysis));
                seq += 1;
            }
        }
    }

    records.extend(edge_case_records(seq));
    records
}

fn template_for(component: &ComponentDescriptor) -> &'static Template {
    catalogue::category(component.category.as_str())
        .map(|entry| entry.template)
        .unwrap_or(&GENERIC_TEMPLATE)
}

fn fill(line: &str, name: &str) -> String {
    line.replace(NAME_PLACEHOLDER, name)
}

fn build_record(
    seq: usize,
    component: &ComponentDescriptor,
    scenario: &str,
    test_type: TestType,
    analysis: &AnalysisResult,
) -> TestCaseRecord {
    let template = template_for(component);
    let name = component.display_name.as_str();
    let steps = build_steps(template, name);

    TestCaseRecord {
        id: format_test_case_id(seq),
        correlation_id: Uuid::new_v4(),
        summary: format!("{} - {}", name, scenario),
        description: format!(
            "{} bileşenindeki {} işlevselliğinin {} testi",
            name,
            scenario.to_lowercase(),
            test_type
        ),
        test_type: ExecutionType::Manual,
        priority: record_priority(scenario, test_type),
        component: name.to_string(),
        labels: vec![
            test_type.to_string(),
            component.category.to_string(),
            scenario_label(scenario).to_string(),
        ],
        preconditions: build_preconditions(analysis.user_type),
        expected_results: build_expected_results(template, name),
        test_data: build_test_data(template),
        estimated_time: estimate_time(steps.len()),
        steps,
        created_at: Utc::now(),
        automation_potential: None,
    }
}

fn build_steps(template: &Template, name: &str) -> Vec<String> {
    let mut steps = vec![
        "Uygulamaya giriş yap".to_string(),
        format!("{} bileşenine git", name),
    ];
    steps.extend(template.steps.iter().map(|line| fill(line, name)));
    steps
}

fn build_expected_results(template: &Template, name: &str) -> Vec<String> {
    let mut results = vec![
        "Başarıyla giriş yapılır".to_string(),
        format!("{} bileşeni erişilebilir durumda", name),
    ];
    results.extend(template.expected_results.iter().map(|line| fill(line, name)));
    results
}

fn build_test_data(template: &Template) -> TestData {
    let mut data = TestData::new();
    data.insert("validUser".to_string(), json!("test_user@example.com"));
    data.insert("environment".to_string(), json!("Test Environment"));
    (template.test_data)(&mut data);
    data
}

fn build_preconditions(user_type: UserType) -> Vec<String> {
    let mut preconditions = vec![
        "Test ortamında uygulama erişilebilir".to_string(),
        "Geçerli kullanıcı hesabı mevcut".to_string(),
    ];
    if user_type == UserType::Admin {
        preconditions.push("Admin yetkilerine sahip kullanıcı".to_string());
    }
    preconditions
}

pub(crate) fn record_priority(scenario: &str, test_type: TestType) -> Priority {
    if test_type == TestType::Functional || scenario.contains(PRIMARY_SCENARIO_MARKER) {
        Priority::High
    } else if matches!(test_type, TestType::Validation | TestType::Ui) {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Label tag for a scenario. Matching ignores case, so catalogue entries written
/// in lower case ("Format validation", "Dosya validation") are tagged
/// `validation` rather than `functional`.
pub(crate) fn scenario_label(scenario: &str) -> &'static str {
    let lower = scenario.to_lowercase();
    if lower.contains("keyboard") {
        "accessibility"
    } else if lower.contains("validation") {
        "validation"
    } else if lower.contains("error") {
        "negative"
    } else {
        "functional"
    }
}

fn estimate_time(step_count: usize) -> String {
    format!("{} dakika", BASE_MINUTES + step_count)
}

fn edge_case_records(start_seq: usize) -> Vec<TestCaseRecord> {
    let mut performance_data = TestData::new();
    performance_data.insert("maxLoadTime".to_string(), json!("3 seconds"));

    let mut browser_data = TestData::new();
    browser_data.insert(
        "browsers".to_string(),
        json!(["Chrome", "Firefox", "Safari", "Edge"]),
    );

    vec![
        TestCaseRecord {
            id: format_test_case_id(start_seq),
            correlation_id: Uuid::new_v4(),
            summary: "Performans Testi - Sayfa Yükleme".to_string(),
            description: "Sayfanın makul sürede yüklendiğinin kontrolü".to_string(),
            test_type: ExecutionType::Manual,
            priority: Priority::Low,
            component: "Page".to_string(),
            labels: vec!["performance".to_string(), "loading".to_string()],
            preconditions: vec![
                "Browser açık".to_string(),
                "Internet bağlantısı mevcut".to_string(),
            ],
            steps: vec![
                "Sayfayı yenile".to_string(),
                "Yükleme süresini ölç".to_string(),
                "Tüm elementlerin yüklendiğini kontrol et".to_string(),
            ],
            expected_results: vec![
                "Sayfa 3 saniye içinde yüklenir".to_string(),
                "Tüm elementler görünür durumda".to_string(),
            ],
            test_data: performance_data,
            estimated_time: "5 dakika".to_string(),
            created_at: Utc::now(),
            automation_potential: None,
        },
        TestCaseRecord {
            id: format_test_case_id(start_seq + 1),
            correlation_id: Uuid::new_v4(),
            summary: "Cross-Browser Compatibility".to_string(),
            description: "Farklı tarayıcılarda uyumluluğun kontrolü".to_string(),
            test_type: ExecutionType::Manual,
            priority: Priority::Medium,
            component: "Application".to_string(),
            labels: vec!["compatibility".to_string(), "browser".to_string()],
            preconditions: vec!["Farklı tarayıcılar yüklü".to_string()],
            steps: vec![
                "Chrome'da uygulamayı aç".to_string(),
                "Firefox'ta uygulamayı aç".to_string(),
                "Safari'de uygulamayı aç (Mac)".to_string(),
                "Her tarayıcıda işlevselliği test et".to_string(),
            ],
            expected_results: vec![
                "Tüm tarayıcılarda aynı görünüm".to_string(),
                "İşlevsellik farklılığı yok".to_string(),
            ],
            test_data: browser_data,
            estimated_time: "15 dakika".to_string(),
            created_at: Utc::now(),
            automation_potential: None,
        },
    ]
}
