use crate::application::{AiInsightsUseCase, TestGenerationUseCase};
use crate::infrastructure::config::{AppConfig, ConfigService};
use crate::infrastructure::llm_clients::{LLMClient, OpenAIClient};
use crate::interfaces::http::{add_log, start_server, HttpState, LogEntry};
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub async fn run() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = ConfigService::load()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string()))?;
    init_tracing(&config);

    let llm_config = config.llm_config();
    let llm_client: Arc<dyn LLMClient + Send + Sync> =
        Arc::new(OpenAIClient::new(config.request_timeout()));
    let generation = Arc::new(TestGenerationUseCase::new(
        llm_client.clone(),
        llm_config.clone(),
    ));
    let insights = Arc::new(AiInsightsUseCase::new(llm_client, llm_config));

    let availability = generation.availability();
    if config.use_ai && !availability.available {
        tracing::warn!(
            key_status = ?availability.key_status,
            "OpenAI API key is missing or invalid, generation will use the rule-based generator"
        );
    }

    let logs: Arc<Mutex<Vec<LogEntry>>> = Arc::new(Mutex::new(Vec::new()));
    let state = HttpState {
        generation,
        insights,
        project_name: config.project_name.clone(),
        use_ai_default: config.use_ai,
        logs: logs.clone(),
    };

    let server = start_server(state, &config.http_host, config.http_port)?;

    let message = format!(
        "HTTP server started on {}:{} (model={} ai_available={})",
        config.http_host, config.http_port, availability.model, availability.available
    );
    tracing::info!("{}", message);
    add_log(&logs, "INFO", "System", &message);

    server.await
}
