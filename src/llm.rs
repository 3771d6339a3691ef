//! Gemini-backed text generation.
//!
//! The handler talks to `LlmClient` only; `GeminiClient` owns the wire
//! format and classifies API failures into typed variants.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gemini API base URL.
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Error)]
pub enum LlmError {
    /// The AI service rejected the configured credential.
    #[error("API key rejected by the AI service")]
    InvalidApiKey,

    #[error("AI service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response from AI service: {0}")]
    MalformedResponse(String),
}

/// Text-generation capability injected into the handler. Implemented by
/// `GeminiClient` in production and by canned fakes in tests.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> std::result::Result<String, LlmError>;
}

pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, model, GEMINI_API_BASE.to_string())
    }

    /// Point the client at a different endpoint (used by tests).
    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key,
            model,
            base_url,
            client,
        }
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> std::result::Result<String, LlmError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.generate_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            // Gemini reports a bad key either as 401/403 or as a 400
            // INVALID_ARGUMENT whose message says "API key not valid".
            if status == StatusCode::UNAUTHORIZED
                || status == StatusCode::FORBIDDEN
                || error_text.contains("API key not valid")
            {
                return Err(LlmError::InvalidApiKey);
            }

            return Err(LlmError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

        api_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| LlmError::MalformedResponse("no candidates in response".to_string()))
    }
}

/// Build the fixed four-section analysis prompt around the raw idea text.
pub fn build_analysis_prompt(idea: &str) -> String {
    format!(
        r#"Analyze the following startup idea and provide:
1.  SWOT Analysis (Strengths, Weaknesses, Opportunities, Threats)
2.  Estimated Market Fit (Assess potential alignment with market needs, target audience, and demand)
3.  Competitor Overview (Identify 2-3 potential key competitors or types of competitors)
4.  Refinement Suggestions (Offer 3-5 actionable suggestions to improve or clarify the idea)

Startup Idea: "{idea}"

Present the analysis clearly, with distinct sections for each of the four points above. Be concise yet comprehensive.
"#
    )
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Content,
    #[serde(default)]
    #[allow(dead_code)]
    finish_reason: Option<String>,
}
