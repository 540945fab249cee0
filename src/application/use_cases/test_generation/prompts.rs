use crate::domain::test_case::TestCaseRecord;

pub(crate) fn build_test_case_prompt(description: &str) -> String {
    let mut body = String::new();
    body.push_str("Aşağıdaki ekran görüntüsünü detaylı analiz et ve kapsamlı test case'leri oluştur.\n\n");
    body.push_str(&format!("Açıklama: {}\n\n", description.trim()));

    body.push_str("Görsel analiz:\n");
    for line in [
        "Ekrandaki tüm UI elementlerini tespit et (buton, form, dropdown, tablo, link, ikon)",
        "Sayfa tipini belirle (login, dashboard, form, liste, detay)",
        "Kullanıcı etkileşim noktalarını ve veri giriş alanlarını belirle",
        "Navigasyon elementlerini ve validation mesajı alanlarını bul",
    ] {
        body.push_str("- ");
        body.push_str(line);
        body.push('\n');
    }

    body.push_str("\nTest case kuralları:\n");
    for line in [
        "Her UI elementi için ayrı test case üret",
        "Positive ve negative senaryoları dahil et",
        "Boş alan, maksimum karakter ve özel karakter edge case'lerini ekle",
        "Accessibility, cross-browser, performans ve güvenlik testlerini ekle",
    ] {
        body.push_str("- ");
        body.push_str(line);
        body.push('\n');
    }

    body.push_str(
        r#"
Sadece şu formatta JSON döndür:
{
  "testCases": [
    {
      "id": "TC_001",
      "summary": "...",
      "description": "...",
      "testType": "Manual|Automated",
      "priority": "High|Medium|Low",
      "component": "...",
      "labels": ["functional"],
      "preconditions": ["..."],
      "steps": ["..."],
      "expectedResults": ["..."],
      "testData": {},
      "estimatedTime": "5 dakika",
      "automationPotential": "Yüksek|Orta|Düşük"
    }
  ],
  "analysis": {
    "detectedComponents": [],
    "pageType": "...",
    "userInteractions": [],
    "dataFields": [],
    "validationPoints": [],
    "suggestions": [],
    "complexity": "Düşük|Orta|Yüksek",
    "estimatedTestCount": 0
  }
}
"#,
    );

    body
}

pub(crate) fn build_suggestion_system_prompt() -> String {
    "You are a QA strategist. Respond in Turkish. Return only JSON shaped as {\"suggestions\": {\"strategy\": [], \"risks\": [], \"automation\": [], \"testData\": [], \"edgeCases\": []}}.".to_string()
}

pub(crate) fn build_suggestion_user_prompt(description: &str) -> String {
    format!(
        "Aşağıdaki test senaryosu için test stratejisi, risk analizi, otomasyon fırsatları, test verisi ve edge case önerileri ver:\n\n{}\n",
        description.trim()
    )
}

pub(crate) fn build_evaluation_system_prompt() -> String {
    "You are a QA reviewer. Score completeness, accuracy, executability and maintainability from 0 to 100. Respond in Turkish. Return only JSON shaped as {\"evaluation\": {\"overallScore\": 0, \"completeness\": 0, \"accuracy\": 0, \"executability\": 0, \"maintainability\": 0, \"improvements\": [], \"missingTests\": []}}.".to_string()
}

pub(crate) fn build_evaluation_user_prompt(test_cases: &[TestCaseRecord]) -> String {
    let mut body = String::from("Test case'ler:\n");
    for case in test_cases {
        body.push_str(&format!("\n[{}] {} ({})\n", case.id, case.summary, case.priority));
        for (index, step) in case.steps.iter().enumerate() {
            body.push_str(&format!("  {}. {}\n", index + 1, step));
        }
        for result in &case.expected_results {
            body.push_str(&format!("  => {}\n", result));
        }
    }
    body
}
