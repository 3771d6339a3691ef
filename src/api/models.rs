use serde::{Deserialize, Serialize};

// The four structured fields are fixed constants, never derived from the AI
// output. The frontend splits `full_ai_response` itself.
pub const SWOT_PLACEHOLDER: &str = "SWOT Analysis will be extracted here (placeholder).";
pub const MARKET_FIT_PLACEHOLDER: &str = "Market Fit assessment will be extracted here (placeholder).";
pub const COMPETITOR_PLACEHOLDER: &str = "Competitor Overview will be extracted here (placeholder).";
pub const REFINEMENT_PLACEHOLDER: &str = "Refinement Suggestions will be extracted here (placeholder).";

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub idea: String,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub swot_analysis: &'static str,
    pub market_fit: &'static str,
    pub competitor_overview: &'static str,
    pub refinement_suggestions: &'static str,
    pub full_ai_response: String,
}

impl AnalyzeResponse {
    pub fn from_ai_text(full_ai_response: String) -> Self {
        AnalyzeResponse {
            swot_analysis: SWOT_PLACEHOLDER,
            market_fit: MARKET_FIT_PLACEHOLDER,
            competitor_overview: COMPETITOR_PLACEHOLDER,
            refinement_suggestions: REFINEMENT_PLACEHOLDER,
            full_ai_response,
        }
    }
}
