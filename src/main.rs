use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use idea_analyzer::{
    api::routes::create_router,
    config::Config,
    db::{self, DbInit},
    llm::{GeminiClient, LlmClient},
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::load()?;

    // A missing key is not fatal: `/` keeps working and `/analyze` reports
    // the misconfiguration itself.
    let llm: Option<Arc<dyn LlmClient>> = match &config.ai_api_key {
        Some(key) => {
            info!(model = %config.ai_model, "Initialized Gemini client");
            Some(Arc::new(GeminiClient::new(
                key.clone(),
                config.ai_model.clone(),
            )))
        }
        None => {
            warn!("AI_API_KEY environment variable not set; /analyze will return errors");
            None
        }
    };

    // Bootstrap the store; a failure degrades persistence, not the server.
    if let DbInit::Degraded(reason) = db::init(&config).await {
        warn!(%reason, "Database initialization failed; continuing without persistence");
    }

    let server_addr = config.server_addr;

    // Create application state
    let app_state = AppState {
        config: Arc::new(config),
        llm,
    };

    // Build the router with routes
    let app = create_router(app_state);

    // Create the listener
    let listener = TcpListener::bind(server_addr).await?;

    // Start the server
    info!("Listening on {}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
