use super::types::*;
use crate::{Error, Result, config::SummarizerConfig};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// A text-shortening capability. Implementations must be safe to call from
/// many request handlers at once.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize_candidates(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> Result<Vec<SummaryCandidate>>;
}

/// Client for a Hugging Face style inference endpoint serving a
/// summarization model.
pub struct HuggingFaceSummarizer {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl HuggingFaceSummarizer {
    pub fn new(config: &SummarizerConfig) -> Result<Self> {
        if config.model.trim().is_empty() {
            return Err(Error::config("Summarizer model must not be empty"));
        }

        let endpoint = format!(
            "{}/models/{}",
            config.base_url.trim_end_matches('/'),
            config.model
        );
        let endpoint = Url::parse(&endpoint).map_err(|e| {
            Error::config(format!("Invalid summarizer base_url '{}': {}", config.base_url, e))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone().filter(|key| !key.is_empty()),
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

#[async_trait]
impl Summarizer for HuggingFaceSummarizer {
    async fn summarize_candidates(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> Result<Vec<SummaryCandidate>> {
        debug!(
            "Requesting summary of {} bytes from {}",
            text.len(),
            self.endpoint
        );

        let request = InferenceRequest {
            inputs: text,
            parameters: *params,
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let mut req_builder = self.client.post(self.endpoint.clone()).json(&request);
        if let Some(ref api_key) = self.api_key {
            req_builder = req_builder.bearer_auth(api_key);
        }

        let response = req_builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<InferenceErrorBody>(&body) {
                Ok(err) => err.error,
                Err(_) => format!("Summarizer returned status {}: {}", status.as_u16(), body),
            };
            return Err(Error::summarizer(message));
        }

        let candidates: Vec<SummaryCandidate> = serde_json::from_str(&body)?;

        debug!("Received {} summary candidates", candidates.len());

        Ok(candidates)
    }
}

/// Builds the backend named by `config.provider`. Any error here is a
/// startup failure.
pub fn build_summarizer(config: &SummarizerConfig) -> Result<Arc<dyn Summarizer>> {
    match config.provider.as_str() {
        "huggingface" => Ok(Arc::new(HuggingFaceSummarizer::new(config)?)),
        other => Err(Error::config(format!(
            "Unknown summarizer provider: '{}'",
            other
        ))),
    }
}
