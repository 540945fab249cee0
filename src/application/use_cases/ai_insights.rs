use crate::application::use_cases::test_generation::prompts::{
    build_evaluation_system_prompt, build_evaluation_user_prompt, build_suggestion_system_prompt,
    build_suggestion_user_prompt,
};
use crate::domain::error::{AppError, Result};
use crate::domain::lenient;
use crate::domain::llm_config::LLMConfig;
use crate::domain::test_case::TestCaseRecord;
use crate::infrastructure::llm_clients::LLMClient;
use crate::infrastructure::response::{clean_llm_response, extract_json_object};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SmartSuggestions {
    pub strategy: Vec<String>,
    pub risks: Vec<String>,
    pub automation: Vec<String>,
    pub test_data: Vec<String>,
    pub edge_cases: Vec<String>,
}

impl SmartSuggestions {
    pub fn fallback() -> Self {
        Self {
            strategy: vec!["Temel fonksiyonel testler yapın".to_string()],
            risks: vec!["Kullanıcı deneyimi riskleri".to_string()],
            automation: vec!["UI elementlerini otomatikleştirin".to_string()],
            test_data: vec!["Geçerli ve geçersiz veriler test edin".to_string()],
            edge_cases: vec!["Sınır değerleri kontrol edin".to_string()],
        }
    }
}

/// Scores are percentages in `0..=100`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct QualityEvaluation {
    #[serde(deserialize_with = "score")]
    pub overall_score: u8,
    #[serde(deserialize_with = "score")]
    pub completeness: u8,
    #[serde(deserialize_with = "score")]
    pub accuracy: u8,
    #[serde(deserialize_with = "score")]
    pub executability: u8,
    #[serde(deserialize_with = "score")]
    pub maintainability: u8,
    #[serde(deserialize_with = "lenient::text_list")]
    pub improvements: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub missing_tests: Vec<String>,
}

impl QualityEvaluation {
    pub fn fallback() -> Self {
        Self {
            overall_score: 75,
            completeness: 80,
            accuracy: 75,
            executability: 70,
            maintainability: 75,
            improvements: vec!["Daha detaylı adımlar ekleyin".to_string()],
            missing_tests: vec!["Negative test case'ler ekleyin".to_string()],
        }
    }
}

/// Any JSON number (or numeric string) rounded and clamped into `0..=100`.
/// Anything else reads as zero.
fn score<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().trim_end_matches('%').parse().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(if raw.is_finite() {
        raw.round().clamp(0.0, 100.0) as u8
    } else {
        0
    })
}

#[derive(Deserialize)]
struct SuggestionEnvelope {
    suggestions: SmartSuggestions,
}

#[derive(Deserialize)]
struct EvaluationEnvelope {
    evaluation: QualityEvaluation,
}

pub struct AiInsightsUseCase {
    llm_client: Arc<dyn LLMClient + Send + Sync>,
    config: LLMConfig,
}

impl AiInsightsUseCase {
    pub fn new(llm_client: Arc<dyn LLMClient + Send + Sync>, config: LLMConfig) -> Self {
        Self { llm_client, config }
    }

    pub async fn suggestions(&self, description: &str) -> SmartSuggestions {
        let result = self
            .ask::<SuggestionEnvelope>(
                &build_suggestion_system_prompt(),
                &build_suggestion_user_prompt(description),
            )
            .await;
        match result {
            Ok(envelope) => envelope.suggestions,
            Err(err) => {
                tracing::warn!(error = %err, "Smart suggestions failed, using defaults");
                SmartSuggestions::fallback()
            }
        }
    }

    pub async fn evaluate(&self, test_cases: &[TestCaseRecord]) -> QualityEvaluation {
        let result = self
            .ask::<EvaluationEnvelope>(
                &build_evaluation_system_prompt(),
                &build_evaluation_user_prompt(test_cases),
            )
            .await;
        match result {
            Ok(envelope) => envelope.evaluation,
            Err(err) => {
                tracing::warn!(error = %err, "Quality evaluation failed, using defaults");
                QualityEvaluation::fallback()
            }
        }
    }

    async fn ask<T: DeserializeOwned>(&self, system: &str, user: &str) -> Result<T> {
        if !self.config.has_valid_key() {
            return Err(AppError::CredentialError(
                "OpenAI API key is missing or invalid".to_string(),
            ));
        }
        let raw = self.llm_client.generate(&self.config, system, user).await?;
        let cleaned = clean_llm_response(&raw);
        let payload = extract_json_object(&cleaned)
            .ok_or_else(|| AppError::ParseError("Model reply contains no JSON object".to_string()))?;
        Ok(serde_json::from_str(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::llm_clients::fake::FakeClient;

    fn use_case(client: Arc<FakeClient>, key: Option<&str>) -> AiInsightsUseCase {
        let config = LLMConfig {
            api_key: key.map(str::to_string),
            ..LLMConfig::default()
        };
        AiInsightsUseCase::new(client, config)
    }

    #[tokio::test]
    async fn test_missing_key_returns_canned_suggestions() {
        let client = Arc::new(FakeClient::replying("{}"));
        let suggestions = use_case(client.clone(), None).suggestions("login").await;
        assert_eq!(suggestions, SmartSuggestions::fallback());
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_suggestions_parse_envelope() {
        let client = Arc::new(FakeClient::replying(
            r#"Sure: {"suggestions": {"strategy": ["Önce happy path"], "edgeCases": ["Boş liste"]}}"#,
        ));
        let suggestions = use_case(client, Some("sk-test")).suggestions("login").await;
        assert_eq!(suggestions.strategy, vec!["Önce happy path"]);
        assert_eq!(suggestions.edge_cases, vec!["Boş liste"]);
        assert!(suggestions.risks.is_empty());
    }

    #[tokio::test]
    async fn test_evaluation_failure_returns_canned_scores() {
        let client = Arc::new(FakeClient::failing());
        let evaluation = use_case(client.clone(), Some("sk-test")).evaluate(&[]).await;
        assert_eq!(evaluation, QualityEvaluation::fallback());
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn test_evaluation_scores_are_clamped() {
        let client = Arc::new(FakeClient::replying(
            r#"{"evaluation": {"overallScore": 250, "completeness": 90, "accuracy": -5}}"#,
        ));
        let evaluation = use_case(client, Some("sk-test")).evaluate(&[]).await;
        assert_eq!(evaluation.overall_score, 100);
        assert_eq!(evaluation.completeness, 90);
        assert_eq!(evaluation.accuracy, 0);
    }

    #[tokio::test]
    async fn test_fractional_and_oversized_scores_keep_the_reply() {
        let client = Arc::new(FakeClient::replying(
            r#"{"evaluation": {"overallScore": 85.5, "completeness": 300, "accuracy": "72",
               "executability": 64.4, "maintainability": null, "improvements": ["Adımları böl"]}}"#,
        ));
        let evaluation = use_case(client, Some("sk-test")).evaluate(&[]).await;
        assert_eq!(evaluation.overall_score, 86);
        assert_eq!(evaluation.completeness, 100);
        assert_eq!(evaluation.accuracy, 72);
        assert_eq!(evaluation.executability, 64);
        assert_eq!(evaluation.maintainability, 0);
        assert_eq!(evaluation.improvements, vec!["Adımları böl"]);
    }
}
