pub mod analyzer;
pub(crate) mod catalogue;
pub(crate) mod prompts;
pub mod remote;
pub mod resolver;
pub mod synthesizer;
mod types;

use crate::domain::analysis::{AnalysisResult, AnalysisSummary, ComponentDescriptor, UserType};
use crate::domain::llm_config::LLMConfig;
use crate::domain::test_case::{GenerationOutcome, TestCaseRecord};
use crate::domain::upload::ScreenshotUpload;
use crate::infrastructure::llm_clients::LLMClient;
use std::sync::Arc;

pub use remote::{AiAvailability, RemoteGenerationAdapter};

/// Which path a generation request takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    LocalRuleBased,
    RemoteModelBacked,
}

impl Generator {
    pub fn select(use_ai: bool, credential_ok: bool, upload: &ScreenshotUpload) -> Self {
        if use_ai && credential_ok && !upload.is_empty() {
            Generator::RemoteModelBacked
        } else {
            Generator::LocalRuleBased
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub description: String,
    pub upload: ScreenshotUpload,
    pub use_ai: bool,
    pub role_hint: Option<UserType>,
}

pub struct TestGenerationUseCase {
    remote: RemoteGenerationAdapter,
}

impl TestGenerationUseCase {
    pub fn new(llm_client: Arc<dyn LLMClient + Send + Sync>, config: LLMConfig) -> Self {
        Self {
            remote: RemoteGenerationAdapter::new(llm_client, config),
        }
    }

    pub fn availability(&self) -> AiAvailability {
        self.remote.availability()
    }

    /// Analysis plus resolved components, without synthesizing records.
    pub fn analyze(
        &self,
        description: &str,
        file_name: Option<&str>,
        role_hint: Option<UserType>,
    ) -> (AnalysisResult, Vec<ComponentDescriptor>) {
        let analysis = analyzer::analyze_description(description, role_hint)
            .with_page_type(analyzer::classify_page(file_name));
        let components = resolver::resolve_components(&analysis);
        (analysis, components)
    }

    pub fn generate_local(
        &self,
        description: &str,
        file_name: Option<&str>,
        role_hint: Option<UserType>,
    ) -> GenerationOutcome {
        let (analysis, components) = self.analyze(description, file_name, role_hint);
        let test_cases = synthesizer::synthesize(&components, &analysis);
        GenerationOutcome {
            analysis: local_summary(&analysis, &components, &test_cases),
            test_cases,
            ai_generated: false,
        }
    }

    /// Never fails: remote errors are logged and answered with local output.
    pub async fn execute(&self, request: &GenerationRequest) -> GenerationOutcome {
        let generator = Generator::select(
            request.use_ai,
            self.remote.is_available(),
            &request.upload,
        );

        if generator == Generator::RemoteModelBacked {
            match self
                .remote
                .generate(&request.upload, &request.description)
                .await
            {
                Ok(outcome) => {
                    tracing::info!(
                        test_cases = outcome.test_cases.len(),
                        model = %self.remote.config().model,
                        "Remote generation succeeded"
                    );
                    return outcome;
                }
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        "Remote generation failed, using rule-based generator"
                    );
                }
            }
        }

        self.generate_local(
            &request.description,
            request.upload.file_name.as_deref(),
            request.role_hint,
        )
    }
}

fn complexity_label(count: usize) -> &'static str {
    match count {
        0..=19 => "Düşük",
        20..=59 => "Orta",
        _ => "Yüksek",
    }
}

fn local_summary(
    analysis: &AnalysisResult,
    components: &[ComponentDescriptor],
    test_cases: &[TestCaseRecord],
) -> AnalysisSummary {
    AnalysisSummary {
        detected_components: components.iter().map(|c| c.display_name.clone()).collect(),
        page_type: analysis.page_type.clone(),
        user_interactions: components
            .iter()
            .flat_map(|c| c.scenarios.iter().cloned())
            .collect(),
        complexity: Some(complexity_label(test_cases.len()).to_string()),
        estimated_test_count: Some(serde_json::json!(test_cases.len())),
        ..AnalysisSummary::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm_config::PLACEHOLDER_API_KEY;
    use crate::infrastructure::llm_clients::fake::FakeClient;

    const REPLY: &str = r#"{"testCases": [{"summary": "Remote", "labels": ["functional"], "steps": ["a"], "expectedResults": ["b"]}], "analysis": {}}"#;

    fn use_case(client: Arc<FakeClient>, key: &str) -> TestGenerationUseCase {
        let config = LLMConfig {
            api_key: Some(key.to_string()),
            ..LLMConfig::default()
        };
        TestGenerationUseCase::new(client, config)
    }

    fn request(use_ai: bool) -> GenerationRequest {
        GenerationRequest {
            description: "Kullanıcı dropdown'dan seçim yapar".to_string(),
            upload: ScreenshotUpload::new(Some("screen.png".to_string()), vec![1, 2, 3]),
            use_ai,
            role_hint: None,
        }
    }

    #[test]
    fn test_select_requires_all_conditions() {
        let upload = ScreenshotUpload::new(None, vec![1]);
        let empty = ScreenshotUpload::default();
        assert_eq!(Generator::select(true, true, &upload), Generator::RemoteModelBacked);
        assert_eq!(Generator::select(false, true, &upload), Generator::LocalRuleBased);
        assert_eq!(Generator::select(true, false, &upload), Generator::LocalRuleBased);
        assert_eq!(Generator::select(true, true, &empty), Generator::LocalRuleBased);
    }

    #[tokio::test]
    async fn test_placeholder_key_falls_back_without_calls() {
        let client = Arc::new(FakeClient::replying(REPLY));
        let outcome = use_case(client.clone(), PLACEHOLDER_API_KEY)
            .execute(&request(true))
            .await;
        assert!(!outcome.ai_generated);
        assert_eq!(client.calls(), 0);
        assert!(outcome.test_cases[0].summary.starts_with("Dropdown Menü - "));
    }

    #[tokio::test]
    async fn test_remote_success_is_returned() {
        let client = Arc::new(FakeClient::replying(REPLY));
        let outcome = use_case(client.clone(), "sk-test").execute(&request(true)).await;
        assert!(outcome.ai_generated);
        assert_eq!(outcome.test_cases.len(), 1);
        assert_eq!(outcome.test_cases[0].summary, "Remote");
    }

    #[tokio::test]
    async fn test_remote_garbage_falls_back() {
        let client = Arc::new(FakeClient::replying("no json here"));
        let outcome = use_case(client.clone(), "sk-test").execute(&request(true)).await;
        assert!(!outcome.ai_generated);
        assert_eq!(client.calls(), 1);
        assert!(!outcome.test_cases.is_empty());
    }

    #[tokio::test]
    async fn test_remote_transport_error_falls_back() {
        let client = Arc::new(FakeClient::failing());
        let outcome = use_case(client.clone(), "sk-test").execute(&request(true)).await;
        assert!(!outcome.ai_generated);
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn test_use_ai_off_stays_local() {
        let client = Arc::new(FakeClient::replying(REPLY));
        let outcome = use_case(client.clone(), "sk-test").execute(&request(false)).await;
        assert!(!outcome.ai_generated);
        assert_eq!(client.calls(), 0);
    }

    #[test]
    fn test_local_summary_counts_records() {
        let client = Arc::new(FakeClient::failing());
        let outcome = use_case(client, "").generate_local("", Some("login_page.png"), None);
        assert_eq!(outcome.analysis.page_type.as_deref(), Some("login"));
        assert_eq!(
            outcome.analysis.estimated_test_count,
            Some(serde_json::json!(outcome.test_cases.len()))
        );
        assert_eq!(
            outcome.analysis.detected_components.len(),
            3,
            "login page resolves three categories"
        );
    }
}
