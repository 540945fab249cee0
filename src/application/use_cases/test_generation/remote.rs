use super::prompts::build_test_case_prompt;
use super::types::RemoteOutput;
use crate::domain::analysis::AnalysisSummary;
use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::{KeyStatus, LLMConfig};
use crate::domain::test_case::{GenerationOutcome, TestCaseRecord};
use crate::domain::upload::ScreenshotUpload;
use crate::infrastructure::image::ImageAttachment;
use crate::infrastructure::llm_clients::LLMClient;
use crate::infrastructure::response::{clean_llm_response, extract_json_object};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

pub const AI_FEATURES: &[&str] = &["image-analysis", "test-case-generation", "smart-suggestions"];

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiAvailability {
    pub available: bool,
    pub model: String,
    pub features: Vec<String>,
    pub key_status: KeyStatus,
}

/// Screenshot-plus-description generation through a chat-completions model.
pub struct RemoteGenerationAdapter {
    llm_client: Arc<dyn LLMClient + Send + Sync>,
    config: LLMConfig,
}

impl RemoteGenerationAdapter {
    pub fn new(llm_client: Arc<dyn LLMClient + Send + Sync>, config: LLMConfig) -> Self {
        Self { llm_client, config }
    }

    pub fn config(&self) -> &LLMConfig {
        &self.config
    }

    pub fn is_available(&self) -> bool {
        self.config.has_valid_key()
    }

    pub fn availability(&self) -> AiAvailability {
        AiAvailability {
            available: self.is_available(),
            model: self.config.model.clone(),
            features: AI_FEATURES.iter().map(|f| f.to_string()).collect(),
            key_status: self.config.key_status(),
        }
    }

    pub async fn generate(
        &self,
        upload: &ScreenshotUpload,
        description: &str,
    ) -> Result<GenerationOutcome> {
        if !self.is_available() {
            return Err(AppError::CredentialError(
                "OpenAI API key is missing or invalid".to_string(),
            ));
        }
        if upload.is_empty() {
            return Err(AppError::ValidationError(
                "Remote generation requires a screenshot.".to_string(),
            ));
        }

        let image = ImageAttachment::from_bytes(&upload.bytes);
        let prompt = build_test_case_prompt(description);
        let raw = self
            .llm_client
            .generate_with_image(&self.config, &prompt, &image)
            .await?;

        let (test_cases, analysis) = parse_remote_output(&raw)?;
        Ok(GenerationOutcome {
            test_cases,
            analysis,
            ai_generated: true,
        })
    }
}

/// Pulls the JSON object out of a model reply and coerces it into records.
pub(crate) fn parse_remote_output(raw: &str) -> Result<(Vec<TestCaseRecord>, AnalysisSummary)> {
    let cleaned = clean_llm_response(raw);
    let payload = extract_json_object(&cleaned)
        .ok_or_else(|| AppError::ParseError("Model reply contains no JSON object".to_string()))?;
    let output: RemoteOutput = serde_json::from_str(payload)?;

    let created_at = Utc::now();
    let test_cases: Vec<TestCaseRecord> = output
        .test_cases
        .into_iter()
        .enumerate()
        .filter_map(|(index, case)| case.into_record(index, created_at))
        .collect();

    if test_cases.is_empty() {
        return Err(AppError::ParseError(
            "Model reply contains no usable test cases".to_string(),
        ));
    }

    Ok((test_cases, output.analysis))
}
