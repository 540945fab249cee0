//! Static keyword and scenario catalogue.
//!
//! Every table here is immutable data. Lookup indexes are built once on first use.

use crate::domain::analysis::TestType;
use crate::domain::test_case::TestData;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;

/// Scenario title marker that raises a record to High priority.
pub(crate) const PRIMARY_SCENARIO_MARKER: &str = "Ana";

pub(crate) const GENERIC_SCENARIO: &str = "Temel işlevsellik kontrolü";

/// Fallback categories when nothing was detected.
pub(crate) const DEFAULT_CATEGORIES: &[&str] = &["button", "form"];

pub(crate) const DEFAULT_TEST_TYPES: &[TestType] = &[TestType::Functional, TestType::Ui];

/// Placeholder replaced with the component display name in template lines.
pub(crate) const NAME_PLACEHOLDER: &str = "{name}";

/// Category-specific phrasing for steps, expected results and test data.
pub(crate) struct Template {
    pub(crate) steps: &'static [&'static str],
    pub(crate) expected_results: &'static [&'static str],
    pub(crate) test_data: fn(&mut TestData),
}

pub(crate) struct CategoryEntry {
    pub(crate) id: &'static str,
    pub(crate) display_name: &'static str,
    pub(crate) keywords: &'static [&'static str],
    pub(crate) scenarios: &'static [&'static str],
    pub(crate) template: &'static Template,
}

pub(crate) struct PageRule {
    pub(crate) pattern: &'static str,
    pub(crate) page_type: &'static str,
    pub(crate) categories: &'static [&'static str],
}

fn no_extra_data(_: &mut TestData) {}

fn dropdown_data(data: &mut TestData) {
    data.insert(
        "options".to_string(),
        json!(["Seçenek 1", "Seçenek 2", "Seçenek 3"]),
    );
}

fn form_data(data: &mut TestData) {
    data.insert(
        "validInputs".to_string(),
        json!({ "name": "Test User", "email": "test@example.com", "phone": "5551234567" }),
    );
    data.insert(
        "invalidInputs".to_string(),
        json!({ "email": "invalid-email", "phone": "123" }),
    );
}

fn gsm_data(data: &mut TestData) {
    data.insert("validInputs".to_string(), json!({ "gsm": "5321234567" }));
    data.insert(
        "invalidInputs".to_string(),
        json!({ "gsm": "123", "letters": "53A1234567" }),
    );
}

fn imei_data(data: &mut TestData) {
    data.insert("validInputs".to_string(), json!({ "imei": "356938035643809" }));
    data.insert(
        "invalidInputs".to_string(),
        json!({ "short": "35693803564", "letters": "35693803564380X" }),
    );
}

fn excel_data(data: &mut TestData) {
    data.insert(
        "files".to_string(),
        json!({ "valid": "numara_listesi.xlsx", "invalid": "numara_listesi.pdf", "empty": "bos.xlsx" }),
    );
}

pub(crate) static GENERIC_TEMPLATE: Template = Template {
    steps: &["{name} ile etkileşim kur", "Beklenen davranışı kontrol et"],
    expected_results: &["Bileşen beklenen şekilde çalışır", "İşlem başarıyla tamamlanır"],
    test_data: no_extra_data,
};

static DROPDOWN_TEMPLATE: Template = Template {
    steps: &[
        "Dropdown menüsüne tıkla",
        "Tüm seçeneklerin görüntülendiğini kontrol et",
        "Bir seçenek seç",
        "Seçimin yapıldığını doğrula",
    ],
    expected_results: &[
        "Dropdown menü açılır",
        "Tüm seçenekler listelenir",
        "Seçim işlemi başarıyla tamamlanır",
    ],
    test_data: dropdown_data,
};

static FORM_TEMPLATE: Template = Template {
    steps: &[
        "Form alanlarını doldur",
        "Gerekli alanları kontrol et",
        "Submit butonuna tıkla",
        "İşlem sonucunu kontrol et",
    ],
    expected_results: &[
        "Form alanları doldurulur",
        "Validation kuralları uygulanır",
        "Form başarıyla submit edilir",
    ],
    test_data: form_data,
};

static BUTTON_TEMPLATE: Template = Template {
    steps: &[
        "Butonun görünür olduğunu kontrol et",
        "Butona tıkla",
        "Beklenen aksiyonun gerçekleştiğini doğrula",
    ],
    expected_results: &["Bileşen beklenen şekilde çalışır", "İşlem başarıyla tamamlanır"],
    test_data: no_extra_data,
};

static GSM_INPUT_TEMPLATE: Template = Template {
    steps: &[
        "{name} alanına tıkla",
        "GSM numarasını gir",
        "Alandan çık",
        "Validation mesajlarını kontrol et",
    ],
    expected_results: &[
        "Geçerli numara kabul edilir",
        "Geçersiz numara için uyarı gösterilir",
    ],
    test_data: gsm_data,
};

static IMEI_TEMPLATE: Template = Template {
    steps: &[
        "{name} alanına tıkla",
        "IMEI numarasını gir",
        "Alandan çık",
        "Hane sayısı uyarılarını kontrol et",
    ],
    expected_results: &[
        "15 haneli IMEI kabul edilir",
        "Eksik ya da hatalı IMEI için uyarı gösterilir",
    ],
    test_data: imei_data,
};

static EXCEL_TEMPLATE: Template = Template {
    steps: &[
        "Excel yükle butonuna tıkla",
        "Dosya seçim penceresinden dosyayı seç",
        "Yükleme işleminin tamamlanmasını bekle",
        "Yüklenen satırların tabloya aktarıldığını kontrol et",
    ],
    expected_results: &[
        "Dosya başarıyla yüklenir",
        "Satırlar tabloda listelenir",
        "Hatalı dosya için uyarı gösterilir",
    ],
    test_data: excel_data,
};

pub(crate) static CATEGORIES: &[CategoryEntry] = &[
    CategoryEntry {
        id: "dropdown",
        display_name: "Dropdown Menü",
        keywords: &["dropdown", "açılır", "seçim", "liste", "menü"],
        scenarios: &[
            "Tüm seçeneklerin görüntülenmesi",
            "Seçim yapma işlemi",
            "Keyboard navigation",
            "Varsayılan değer kontrolü",
            "Boş seçim validation",
        ],
        template: &DROPDOWN_TEMPLATE,
    },
    CategoryEntry {
        id: "button",
        display_name: "Buton",
        keywords: &["buton", "button", "tıkla", "bas"],
        scenarios: &[
            "Buton tıklama işlevi",
            "Hover state kontrolü",
            "Disabled state kontrolü",
            "Loading state kontrolü",
        ],
        template: &BUTTON_TEMPLATE,
    },
    CategoryEntry {
        id: "form",
        display_name: "Form",
        keywords: &["form", "giriş", "kayıt", "doldur"],
        scenarios: &[
            "Form doldurma işlemi",
            "Validation kuralları",
            "Submit işlemi",
            "Reset işlemi",
            "Error handling",
        ],
        template: &FORM_TEMPLATE,
    },
    CategoryEntry {
        id: "input",
        display_name: "Giriş Alanı",
        keywords: &["input", "alan", "field", "giriş"],
        scenarios: &[
            "Veri girişi",
            "Validation kontrolleri",
            "Placeholder text",
            "Character limit",
            "Format kontrolü",
        ],
        template: &GENERIC_TEMPLATE,
    },
    CategoryEntry {
        id: "navigation",
        display_name: "Navigasyon",
        keywords: &["menü", "nav", "navigasyon", "yönlendirme"],
        scenarios: &[
            "Menü öğelerine tıklama",
            "Sayfa yönlendirmeleri",
            "Breadcrumb kontrolü",
            "Mobile responsive",
        ],
        template: &GENERIC_TEMPLATE,
    },
    CategoryEntry {
        id: "table",
        display_name: "Tablo",
        keywords: &["tablo", "table", "liste", "satır"],
        scenarios: &[
            "Veri görüntüleme",
            "Sıralama işlemleri",
            "Filtreleme",
            "Pagination",
            "Row selection",
        ],
        template: &GENERIC_TEMPLATE,
    },
    CategoryEntry {
        id: "modal",
        display_name: "Modal Pencere",
        keywords: &["modal", "popup", "pencere"],
        scenarios: &[
            "Modal açılması",
            "Modal kapanması",
            "Overlay tıklama",
            "ESC tuşu ile kapanma",
        ],
        template: &GENERIC_TEMPLATE,
    },
    CategoryEntry {
        id: "search",
        display_name: "Arama",
        keywords: &["arama", "search", "filtre"],
        scenarios: &[
            "Arama işlevi",
            "Sonuç görüntüleme",
            "Boş arama",
            "Filtre uygulama",
        ],
        template: &GENERIC_TEMPLATE,
    },
    CategoryEntry {
        id: "upload",
        display_name: "Dosya Yükleme",
        keywords: &["yükle", "upload", "dosya"],
        scenarios: &[
            "Dosya seçimi",
            "Drag & drop",
            "Dosya validation",
            "Upload progress",
        ],
        template: &GENERIC_TEMPLATE,
    },
    CategoryEntry {
        id: "login",
        display_name: "Giriş Sistemi",
        keywords: &["giriş", "login", "oturum"],
        scenarios: &[
            "Başarılı giriş",
            "Hatalı giriş",
            "Şifre unuttum",
            "Session yönetimi",
        ],
        template: &GENERIC_TEMPLATE,
    },
    CategoryEntry {
        id: "gsm_dropdown",
        display_name: "GSM Tipi Dropdown",
        keywords: &["gsm tipi", "hat tipi"],
        scenarios: &[
            "Tüm seçeneklerin görüntülenmesi",
            "Seçim yapma işlemi",
            "Keyboard navigation",
            "Boş seçim validation",
        ],
        template: &DROPDOWN_TEMPLATE,
    },
    CategoryEntry {
        id: "gsm_input",
        display_name: "GSM Numarası Alanı",
        keywords: &["gsm no", "gsm numara"],
        scenarios: &[
            "Geçerli GSM numarası girişi",
            "Format validation",
            "Karakter limiti kontrolü",
            "Hatalı numara Error mesajı",
        ],
        template: &GSM_INPUT_TEMPLATE,
    },
    CategoryEntry {
        id: "excel_upload",
        display_name: "Excel Yükleme",
        keywords: &["excel", "toplu yükleme"],
        scenarios: &[
            "Ana Excel dosyası yükleme",
            "Geçersiz dosya formatı",
            "Boş dosya yükleme",
            "Şablon indirme",
        ],
        template: &EXCEL_TEMPLATE,
    },
    CategoryEntry {
        id: "imei_field",
        display_name: "IMEI Alanı",
        keywords: &["imei"],
        scenarios: &[
            "15 haneli IMEI girişi",
            "IMEI format validation",
            "Eksik hane kontrolü",
        ],
        template: &IMEI_TEMPLATE,
    },
    CategoryEntry {
        id: "add_row_button",
        display_name: "Satır Ekle Butonu",
        keywords: &["satır ekle"],
        scenarios: &["Yeni satır ekleme", "Satır silme", "Maksimum satır limiti"],
        template: &BUTTON_TEMPLATE,
    },
    CategoryEntry {
        id: "navigation_buttons",
        display_name: "Navigasyon Butonları",
        keywords: &["ileri butonu", "geri butonu"],
        scenarios: &[
            "İleri butonu ile geçiş",
            "Geri butonu ile dönüş",
            "Zorunlu alanlar boşken ilerleme",
        ],
        template: &GENERIC_TEMPLATE,
    },
];

pub(crate) static TEST_TYPE_KEYWORDS: &[(TestType, &[&str])] = &[
    (TestType::Functional, &["işlevsel", "functional", "çalış"]),
    (TestType::Ui, &["görünüm", "ui", "arayüz", "görsel"]),
    (
        TestType::Validation,
        &["doğrula", "validation", "kontrol", "geçerli"],
    ),
    (
        TestType::Accessibility,
        &["erişilebilir", "accessibility", "keyboard"],
    ),
    (TestType::Performance, &["performans", "hız", "yavaş"]),
    (
        TestType::Negative,
        &["negative", "hatalı", "yanlış", "geçersiz"],
    ),
];

pub(crate) const HIGH_PRIORITY_WORDS: &[&str] = &["kritik", "önemli", "critical", "important", "high"];
pub(crate) const LOW_PRIORITY_WORDS: &[&str] = &["düşük", "low"];
pub(crate) const ADMIN_WORDS: &[&str] = &["admin", "yönetici", "manager"];

/// File-name substring rules, evaluated in order. First match wins.
pub(crate) static PAGE_RULES: &[PageRule] = &[
    PageRule {
        pattern: "havuz",
        page_type: "havuz",
        categories: &[
            "gsm_dropdown",
            "gsm_input",
            "excel_upload",
            "imei_field",
            "add_row_button",
            "navigation_buttons",
        ],
    },
    PageRule {
        pattern: "devir",
        page_type: "devir",
        categories: &["dropdown", "form", "button"],
    },
    PageRule {
        pattern: "login",
        page_type: "login",
        categories: &["login", "input", "button"],
    },
    PageRule {
        pattern: "giris",
        page_type: "login",
        categories: &["login", "input", "button"],
    },
    PageRule {
        pattern: "dashboard",
        page_type: "dashboard",
        categories: &["navigation", "table", "search"],
    },
];

static CATEGORY_INDEX: Lazy<HashMap<&'static str, &'static CategoryEntry>> =
    Lazy::new(|| CATEGORIES.iter().map(|entry| (entry.id, entry)).collect());

static PAGE_INDEX: Lazy<HashMap<&'static str, &'static PageRule>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for rule in PAGE_RULES {
        index.entry(rule.page_type).or_insert(rule);
    }
    index
});

pub(crate) fn category(id: &str) -> Option<&'static CategoryEntry> {
    CATEGORY_INDEX.get(id).copied()
}

pub(crate) fn page_categories(page_type: &str) -> Option<&'static [&'static str]> {
    PAGE_INDEX.get(page_type).map(|rule| rule.categories)
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub id: &'static str,
    pub display_name: &'static str,
    pub keywords: &'static [&'static str],
    pub scenarios: &'static [&'static str],
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PageRuleView {
    pub pattern: &'static str,
    pub page_type: &'static str,
    pub categories: &'static [&'static str],
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueOverview {
    pub categories: Vec<CategoryView>,
    pub page_rules: Vec<PageRuleView>,
}

/// Read-only view of the catalogue tables, in declaration order.
pub fn overview() -> CatalogueOverview {
    CatalogueOverview {
        categories: CATEGORIES
            .iter()
            .map(|entry| CategoryView {
                id: entry.id,
                display_name: entry.display_name,
                keywords: entry.keywords,
                scenarios: entry.scenarios,
            })
            .collect(),
        page_rules: PAGE_RULES
            .iter()
            .map(|rule| PageRuleView {
                pattern: rule.pattern,
                page_type: rule.page_type,
                categories: rule.categories,
            })
            .collect(),
    }
}
