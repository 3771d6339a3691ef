use axum::{
    extract::{rejection::JsonRejection, Json, State},
    response::Html,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{error, info};

use crate::api::models::{AnalyzeRequest, AnalyzeResponse};
use crate::error::{AppError, Result};
use crate::llm::build_analysis_prompt;
use crate::AppState;

/// Maximum accepted idea length, in characters.
const MAX_IDEA_LEN: usize = 5000;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/analyze", post(analyze_handler))
        .nest_service("/static", ServeDir::new("static"))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

/// Serves the main page. The page is compiled into the binary, so this
/// route stays up even when the AI key or database are missing.
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

async fn analyze_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>> {
    // Credential check runs before any look at the body: an unconfigured
    // deployment answers 500 no matter what was posted.
    let Some(llm) = &state.llm else {
        return Err(AppError::ConfigError(
            "AI API key not configured. Please set the AI_API_KEY environment variable."
                .to_string(),
        ));
    };

    // Missing body, malformed JSON, and a missing `idea` key all land here.
    let Ok(Json(AnalyzeRequest { idea })) = payload else {
        return Err(AppError::ValidationError("No idea provided".to_string()));
    };

    if idea.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Idea text cannot be empty".to_string(),
        ));
    }

    // Inclusive bound: exactly MAX_IDEA_LEN characters still goes through.
    if idea.chars().count() > MAX_IDEA_LEN {
        return Err(AppError::ValidationError(
            "Idea text is too long. Please keep it under 5000 characters.".to_string(),
        ));
    }

    info!(idea = %idea, "Received idea for analysis");

    let prompt = build_analysis_prompt(&idea);
    let analysis_text = llm.generate(&prompt).await.map_err(|e| {
        error!("Error during AI analysis: {}", e);
        AppError::from(e)
    })?;

    // The model text goes back verbatim; the structured fields stay
    // placeholders until real extraction lands.
    Ok(Json(AnalyzeResponse::from_ai_text(analysis_text)))
}
