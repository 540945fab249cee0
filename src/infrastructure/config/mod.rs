use crate::domain::error::Result;
use crate::domain::llm_config::{LLMConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = "testgen.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub openai_api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub request_timeout_secs: u64,
    pub use_ai: bool,
    pub http_host: String,
    pub http_port: u16,
    pub project_name: String,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 2000,
            temperature: 0.7,
            request_timeout_secs: 120,
            use_ai: true,
            http_host: "127.0.0.1".to_string(),
            http_port: 3001,
            project_name: "X-ray Test Cases".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn llm_config(&self) -> LLMConfig {
        LLMConfig {
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            api_key: self.openai_api_key.clone(),
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

pub struct ConfigService;

impl ConfigService {
    /// Defaults, then the TOML file, then `TESTGEN_*` variables, then `OPENAI_API_KEY`.
    pub fn figment(config_file: PathBuf) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed("TESTGEN_"))
            .merge(Env::raw().only(&["OPENAI_API_KEY"]))
    }

    pub fn load() -> Result<AppConfig> {
        let config_file = std::env::var("TESTGEN_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        Ok(Self::figment(config_file).extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_map_to_llm_config() {
        let config = AppConfig::default();
        let llm = config.llm_config();
        assert_eq!(llm.model, "gpt-4o");
        assert_eq!(llm.max_tokens, Some(2000));
        assert_eq!(config.http_port, 3001);
        assert!(!llm.has_valid_key());
    }

    #[test]
    fn test_layering_with_jail() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "testgen.toml",
                r#"
                    model = "gpt-4o-mini"
                    http_port = 8080
                "#,
            )?;
            jail.set_env("TESTGEN_HTTP_PORT", "9090");
            jail.set_env("OPENAI_API_KEY", "sk-from-env");

            let config: AppConfig =
                ConfigService::figment(PathBuf::from("testgen.toml")).extract()?;
            assert_eq!(config.model, "gpt-4o-mini");
            assert_eq!(config.http_port, 9090);
            assert_eq!(config.openai_api_key.as_deref(), Some("sk-from-env"));
            assert!(config.llm_config().has_valid_key());
            Ok(())
        });
    }
}
