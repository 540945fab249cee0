use super::LLMClient;
use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::LLMConfig;
use crate::infrastructure::image::ImageAttachment;
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

/// Chat-completions client for OpenAI-compatible endpoints.
pub struct OpenAIClient {
    client: reqwest::Client,
}

impl OpenAIClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    fn api_key(config: &LLMConfig) -> Result<String> {
        config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::CredentialError("Missing API key for OpenAI".to_string()))
    }

    fn completions_url(config: &LLMConfig) -> String {
        if config.base_url.ends_with('/') {
            format!("{}chat/completions", config.base_url)
        } else {
            format!("{}/chat/completions", config.base_url)
        }
    }

    async fn post(&self, config: &LLMConfig, body: serde_json::Value) -> Result<String> {
        let api_key = Self::api_key(config)?;
        let url = Self::completions_url(config);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::LLMError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::LLMError(format!(
                "API error ({}): {}",
                status, text
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::LLMError(format!("Failed to parse JSON: {}", e)))?;

        json["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| AppError::LLMError("Invalid response format".to_string()))
    }
}

pub(crate) fn vision_request_body(
    config: &LLMConfig,
    prompt: &str,
    image: &ImageAttachment,
) -> serde_json::Value {
    json!({
        "model": config.model,
        "messages": [
            {
                "role": "user",
                "content": [
                    { "type": "text", "text": prompt },
                    { "type": "image_url", "image_url": { "url": image.data_url() } }
                ]
            }
        ],
        "max_tokens": config.max_tokens,
        "temperature": config.temperature,
    })
}

#[async_trait]
impl LLMClient for OpenAIClient {
    async fn generate(&self, config: &LLMConfig, system: &str, user: &str) -> Result<String> {
        let body = json!({
            "model": config.model,
            "messages": [
                {
                    "role": "system",
                    "content": system
                },
                {
                    "role": "user",
                    "content": user
                }
            ],
            "max_tokens": config.max_tokens,
            "temperature": config.temperature,
        });

        self.post(config, body).await
    }

    async fn generate_with_image(
        &self,
        config: &LLMConfig,
        prompt: &str,
        image: &ImageAttachment,
    ) -> Result<String> {
        self.post(config, vision_request_body(config, prompt, image))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_url_handles_trailing_slash() {
        let mut config = LLMConfig::default();
        assert_eq!(
            OpenAIClient::completions_url(&config),
            "https://api.openai.com/v1/chat/completions"
        );
        config.base_url = "http://localhost:1234/v1/".to_string();
        assert_eq!(
            OpenAIClient::completions_url(&config),
            "http://localhost:1234/v1/chat/completions"
        );
    }

    #[test]
    fn test_vision_body_shape() {
        let config = LLMConfig::default();
        let image = ImageAttachment::new("image/png", "QUJD");
        let body = vision_request_body(&config, "describe", &image);

        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["max_tokens"], 2000);
        let content = &body["messages"][0]["content"];
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(content[0]["type"], "text");
        assert_eq!(content[0]["text"], "describe");
        assert_eq!(content[1]["image_url"]["url"], "data:image/png;base64,QUJD");
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_request() {
        let client = OpenAIClient::new(Duration::from_secs(1));
        let config = LLMConfig::default();
        let result = client.generate(&config, "system", "user").await;
        assert!(matches!(result, Err(AppError::CredentialError(_))));
    }
}
