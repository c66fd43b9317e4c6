use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest {
    pub query: String,
}

/// Payload returned by the analysis service; unknown fields are ignored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Free text, possibly carrying simple HTML or Markdown markup
    pub analysis: String,
    /// Ticker-like identifiers in the order the service listed them
    pub coins: Vec<String>,
}
