use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use cribsense::application::services::{AnalysisService, ChatService};
use cribsense::infrastructure::llm::GeminiClient;
use cribsense::infrastructure::observability::{TracingConfig, init_tracing};
use cribsense::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".to_string())
        .parse()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(&environment).map_err(anyhow::Error::from)?;

    init_tracing(TracingConfig {
        level: settings.logging.level.clone(),
        json_format: settings.logging.enable_json,
    });

    tracing::info!(environment = %environment, "starting cribsense");

    if settings.gemini.api_key.is_empty() {
        tracing::warn!("no Gemini API key configured, upstream calls will be rejected");
    }

    let client = Arc::new(GeminiClient::new(
        &settings.gemini.base_url,
        &settings.gemini.api_key,
        &settings.gemini.model,
        Duration::from_secs(settings.gemini.timeout_seconds),
    )?);

    let analysis_service = Arc::new(AnalysisService::new(Arc::clone(&client)));
    let chat_service = Arc::new(ChatService::new(Arc::clone(&client)));

    let state = AppState {
        analysis_service,
        chat_service,
        settings: settings.clone(),
    };

    let router = create_router(state);

    if !settings.server.enabled {
        tracing::warn!("network listener disabled by configuration, exiting");
        return Ok(());
    }

    let listener =
        TcpListener::bind((settings.server.host.as_str(), settings.server.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
