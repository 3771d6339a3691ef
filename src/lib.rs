pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod llm;

use std::sync::Arc;
use config::Config;
use llm::LlmClient;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// `None` when no API key was configured at startup; `/analyze`
    /// re-checks this on every request.
    pub llm: Option<Arc<dyn LlmClient>>,
}
