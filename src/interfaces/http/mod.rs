use crate::application::use_cases::ai_insights::AiInsightsUseCase;
use crate::application::use_cases::test_case_query::{priority_stats, summarize, TestCaseQuery};
use crate::application::use_cases::test_generation::{
    catalogue, GenerationRequest, TestGenerationUseCase,
};
use crate::domain::analysis::UserType;
use crate::domain::error::AppError;
use crate::domain::export::{ExportFormat, ExportSettings};
use crate::domain::test_case::TestCaseRecord;
use crate::domain::upload::{ScreenshotUpload, MAX_UPLOAD_BYTES};
use crate::infrastructure::export::export;
use actix_cors::Cors;
use actix_web::{dev::Server, get, post, web, App, HttpResponse, HttpServer, Responder};
use base64::Engine as _;
use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::{Arc, Mutex};
use validator::Validate;

const MAX_LOG_ENTRIES: usize = 100;
// Screenshots travel base64-encoded inside the JSON body.
const MAX_JSON_BYTES: usize = MAX_UPLOAD_BYTES / 3 * 4 + 64 * 1024;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogEntry {
    pub time: String,
    pub level: String,
    pub source: String,
    pub message: String,
}

pub struct HttpState {
    pub generation: Arc<TestGenerationUseCase>,
    pub insights: Arc<AiInsightsUseCase>,
    pub project_name: String,
    pub use_ai_default: bool,
    pub logs: Arc<Mutex<Vec<LogEntry>>>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    #[validate(length(max = 10000))]
    pub description: String,
    #[validate(length(min = 1, max = 255))]
    pub file_name: Option<String>,
    /// Raw base64 or a `data:` URL.
    pub image_base64: Option<String>,
    pub use_ai: Option<bool>,
    pub user_type: Option<UserType>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    #[validate(length(max = 10000))]
    pub description: String,
    pub file_name: Option<String>,
    pub user_type: Option<UserType>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub test_cases: Vec<TestCaseRecord>,
    #[serde(default)]
    pub settings: ExportSettings,
    pub project: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequest {
    pub test_cases: Vec<TestCaseRecord>,
    #[serde(flatten)]
    pub query: TestCaseQuery,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SuggestionRequest {
    #[validate(length(min = 1, max = 10000))]
    pub description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    pub test_cases: Vec<TestCaseRecord>,
}

fn error_response(err: &AppError) -> HttpResponse {
    if err.is_client_error() {
        HttpResponse::BadRequest().body(err.to_string())
    } else {
        HttpResponse::InternalServerError().body(err.to_string())
    }
}

fn decode_image(encoded: &str) -> crate::domain::error::Result<Vec<u8>> {
    let payload = match encoded.split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => encoded,
    };
    base64::prelude::BASE64_STANDARD
        .decode(payload.trim())
        .map_err(|e| AppError::ValidationError(format!("Invalid image payload: {}", e)))
}

fn build_upload(req: &GenerateRequest) -> crate::domain::error::Result<ScreenshotUpload> {
    let bytes = match req.image_base64.as_deref() {
        Some(encoded) if !encoded.trim().is_empty() => decode_image(encoded)?,
        _ => Vec::new(),
    };
    let upload = ScreenshotUpload::new(req.file_name.clone(), bytes);
    upload.validate()?;
    Ok(upload)
}

#[post("/generate")]
async fn generate(data: web::Data<HttpState>, req: web::Json<GenerateRequest>) -> impl Responder {
    if let Err(e) = req.validate() {
        return HttpResponse::BadRequest().body(e.to_string());
    }
    let upload = match build_upload(&req) {
        Ok(upload) => upload,
        Err(e) => {
            add_log(&data.logs, "WARN", "HttpApi", &format!("Upload rejected: {}", e));
            return error_response(&e);
        }
    };

    let use_ai = req.use_ai.unwrap_or(data.use_ai_default);
    add_log(
        &data.logs,
        "INFO",
        "HttpApi",
        &format!(
            "Generating test cases (use_ai={} file={})",
            use_ai,
            req.file_name.as_deref().unwrap_or("-")
        ),
    );

    let request = GenerationRequest {
        description: req.description.clone(),
        upload,
        use_ai,
        role_hint: req.user_type,
    };
    let outcome = data.generation.execute(&request).await;

    if use_ai && !outcome.ai_generated {
        add_log(
            &data.logs,
            "WARN",
            "Generator",
            "AI generation unavailable, used rule-based generator",
        );
    }
    add_log(
        &data.logs,
        "INFO",
        "Generator",
        &format!("Generated {} test cases", outcome.test_cases.len()),
    );

    HttpResponse::Ok().json(outcome)
}

#[post("/analyze")]
async fn analyze(data: web::Data<HttpState>, req: web::Json<AnalyzeRequest>) -> impl Responder {
    if let Err(e) = req.validate() {
        return HttpResponse::BadRequest().body(e.to_string());
    }
    let (analysis, components) = data
        .generation
        .analyze(&req.description, req.file_name.as_deref(), req.user_type);
    HttpResponse::Ok().json(json!({ "analysis": analysis, "components": components }))
}

#[post("/export/{format}")]
async fn export_test_cases(
    data: web::Data<HttpState>,
    format: web::Path<String>,
    req: web::Json<ExportRequest>,
) -> impl Responder {
    let format: ExportFormat = match format.parse() {
        Ok(format) => format,
        Err(e) => return error_response(&e),
    };
    let project = req.project.as_deref().unwrap_or(&data.project_name);

    match export(format, &req.test_cases, &req.settings, project, Utc::now()) {
        Ok(artifact) => {
            add_log(
                &data.logs,
                "INFO",
                "Export",
                &format!(
                    "Exported {} test cases as {}",
                    req.test_cases.len(),
                    artifact.file_name
                ),
            );
            HttpResponse::Ok()
                .content_type(artifact.content_type)
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", artifact.file_name),
                ))
                .body(artifact.body)
        }
        Err(e) => {
            add_log(&data.logs, "ERROR", "Export", &format!("Export failed: {}", e));
            error_response(&e)
        }
    }
}

#[post("/test-cases/filter")]
async fn filter_test_cases(req: web::Json<FilterRequest>) -> impl Responder {
    let filtered = req.query.apply(&req.test_cases);
    HttpResponse::Ok().json(json!({
        "stats": priority_stats(&req.test_cases),
        "summary": summarize(&filtered),
        "testCases": filtered,
    }))
}

#[get("/ai/status")]
async fn ai_status(data: web::Data<HttpState>) -> impl Responder {
    HttpResponse::Ok().json(data.generation.availability())
}

#[post("/ai/suggestions")]
async fn ai_suggestions(
    data: web::Data<HttpState>,
    req: web::Json<SuggestionRequest>,
) -> impl Responder {
    if let Err(e) = req.validate() {
        return HttpResponse::BadRequest().body(e.to_string());
    }
    let suggestions = data.insights.suggestions(&req.description).await;
    HttpResponse::Ok().json(json!({ "suggestions": suggestions }))
}

#[post("/ai/evaluate")]
async fn ai_evaluate(data: web::Data<HttpState>, req: web::Json<EvaluateRequest>) -> impl Responder {
    let evaluation = data.insights.evaluate(&req.test_cases).await;
    HttpResponse::Ok().json(json!({ "evaluation": evaluation }))
}

#[get("/catalogue")]
async fn get_catalogue() -> impl Responder {
    HttpResponse::Ok().json(catalogue::overview())
}

#[get("/logs")]
async fn get_logs(data: web::Data<HttpState>) -> impl Responder {
    let logs = data.logs.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    HttpResponse::Ok().json(&*logs)
}

pub fn add_log_entry(
    logs: &Mutex<Vec<LogEntry>>,
    level: &str,
    source: &str,
    message: &str,
) -> LogEntry {
    let entry = LogEntry {
        time: Local::now().format("%H:%M:%S").to_string(),
        level: level.to_string(),
        source: source.to_string(),
        message: message.to_string(),
    };
    let mut logs = logs.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    logs.push(entry.clone());
    if logs.len() > MAX_LOG_ENTRIES {
        logs.remove(0);
    }
    entry
}

pub fn add_log(logs: &Mutex<Vec<LogEntry>>, level: &str, source: &str, message: &str) {
    add_log_entry(logs, level, source, message);
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().limit(MAX_JSON_BYTES));
    cfg.service(
        web::scope("/api")
            .service(generate)
            .service(analyze)
            .service(export_test_cases)
            .service(filter_test_cases)
            .service(ai_status)
            .service(ai_suggestions)
            .service(ai_evaluate)
            .service(get_catalogue)
            .service(get_logs),
    );
}

pub fn start_server(state: HttpState, host: &str, port: u16) -> std::io::Result<Server> {
    let state = web::Data::new(state);

    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // Allow all origins for local tool

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .configure(routes)
    })
    .bind((host, port))?
    .run();

    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm_config::LLMConfig;
    use crate::infrastructure::llm_clients::fake::FakeClient;
    use actix_web::{http::StatusCode, test};

    fn state() -> web::Data<HttpState> {
        let client = Arc::new(FakeClient::failing());
        let config = LLMConfig::default();
        web::Data::new(HttpState {
            generation: Arc::new(TestGenerationUseCase::new(client.clone(), config.clone())),
            insights: Arc::new(AiInsightsUseCase::new(client, config)),
            project_name: "X-ray Test Cases".to_string(),
            use_ai_default: true,
            logs: Arc::new(Mutex::new(Vec::new())),
        })
    }

    #[::core::prelude::v1::test]
    fn test_log_buffer_is_bounded() {
        let logs = Mutex::new(Vec::new());
        for i in 0..105 {
            add_log(&logs, "INFO", "Test", &format!("entry {}", i));
        }
        let logs = logs.lock().unwrap();
        assert_eq!(logs.len(), MAX_LOG_ENTRIES);
        assert_eq!(logs[0].message, "entry 5");
    }

    #[::core::prelude::v1::test]
    fn test_decode_image_accepts_data_url() {
        assert_eq!(decode_image("data:image/png;base64,QUJD").unwrap(), b"ABC");
        assert_eq!(decode_image("QUJD").unwrap(), b"ABC");
        assert!(decode_image("not base64!").is_err());
    }

    #[actix_web::test]
    async fn test_generate_falls_back_locally() {
        let data = state();
        let app = test::init_service(App::new().app_data(data.clone()).configure(routes)).await;
        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(json!({
                "description": "Kullanıcı dropdown'dan seçim yapar",
                "fileName": "devir_ekrani.png",
                "imageBase64": "QUJD"
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["aiGenerated"], false);
        assert_eq!(body["testCases"][0]["id"], "TC_001");
        assert_eq!(body["analysis"]["pageType"], "devir");

        let logs = data.logs.lock().unwrap();
        assert!(logs.iter().any(|entry| entry.level == "WARN"));
    }

    #[actix_web::test]
    async fn test_generate_accepts_large_screenshot() {
        let mut png = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        png.resize(3 * 1024 * 1024, 0);
        let encoded = base64::Engine::encode(&base64::prelude::BASE64_STANDARD, &png);

        let app = test::init_service(App::new().app_data(state()).configure(routes)).await;
        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(json!({
                "description": "Formu doldur ve kaydet",
                "fileName": "screen.png",
                "imageBase64": format!("data:image/png;base64,{}", encoded)
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["aiGenerated"], false);
        assert!(!body["testCases"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_generate_rejects_non_image_upload() {
        let app = test::init_service(App::new().app_data(state()).configure(routes)).await;
        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(json!({ "fileName": "notes.txt", "imageBase64": "QUJD" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_export_sets_download_headers() {
        let data = state();
        let app = test::init_service(App::new().app_data(data.clone()).configure(routes)).await;
        let outcome = data.generation.generate_local("buton", None, None);
        let req = test::TestRequest::post()
            .uri("/api/export/gherkin")
            .set_json(json!({ "testCases": outcome.test_cases }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let disposition = resp
            .headers()
            .get("Content-Disposition")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(disposition.contains("test-scenarios-"));
        assert!(disposition.ends_with(".feature\""));

        let body = test::read_body(resp).await;
        assert!(std::str::from_utf8(&body)
            .unwrap()
            .starts_with("Feature: Generated Test Scenarios"));
    }

    #[actix_web::test]
    async fn test_export_rejects_unknown_format() {
        let app = test::init_service(App::new().app_data(state()).configure(routes)).await;
        let req = test::TestRequest::post()
            .uri("/api/export/xlsx")
            .set_json(json!({ "testCases": [] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_filter_by_priority() {
        let data = state();
        let app = test::init_service(App::new().app_data(data.clone()).configure(routes)).await;
        let outcome = data.generation.generate_local("", None, None);
        let req = test::TestRequest::post()
            .uri("/api/test-cases/filter")
            .set_json(json!({ "testCases": outcome.test_cases, "priority": "Low" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let filtered = body["testCases"].as_array().unwrap();
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|tc| tc["priority"] == "Low"));
        assert_eq!(body["summary"]["total"], filtered.len());
    }

    #[actix_web::test]
    async fn test_ai_status_and_canned_suggestions() {
        let app = test::init_service(App::new().app_data(state()).configure(routes)).await;

        let req = test::TestRequest::get().uri("/api/ai/status").to_request();
        let status: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(status["available"], false);
        assert_eq!(status["keyStatus"], "invalid_or_missing");

        let req = test::TestRequest::post()
            .uri("/api/ai/suggestions")
            .set_json(json!({ "description": "login ekranı" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body["suggestions"]["strategy"][0],
            "Temel fonksiyonel testler yapın"
        );
    }

    #[actix_web::test]
    async fn test_catalogue_lists_categories() {
        let app = test::init_service(App::new().app_data(state()).configure(routes)).await;
        let req = test::TestRequest::get().uri("/api/catalogue").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["categories"][0]["displayName"], "Dropdown Menü");
    }
}
