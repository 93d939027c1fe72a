use serde::{Deserialize, Serialize};

pub const STATUS_MESSAGE: &str = "AI Summarizer API is running";

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    // Missing text is validated like empty text.
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
