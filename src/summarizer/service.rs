use super::{client::Summarizer, types::GenerationParams};
use crate::{Error, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Inputs longer than this many characters are cut before inference.
pub const MAX_INPUT_CHARS: usize = 4096;

pub const TEXT_REQUIRED: &str = "Text is required";

/// Validates, truncates and delegates summarize calls to a shared backend.
#[derive(Clone)]
pub struct SummarizeService {
    summarizer: Arc<dyn Summarizer>,
    params: GenerationParams,
}

impl SummarizeService {
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            summarizer,
            params: GenerationParams::default(),
        }
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub async fn summarize(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(Error::invalid_input(TEXT_REQUIRED));
        }

        let input = truncate_chars(text, MAX_INPUT_CHARS);
        if input.len() < text.len() {
            info!(
                "Truncated input from {} to {} bytes",
                text.len(),
                input.len()
            );
        }

        let candidates = self
            .summarizer
            .summarize_candidates(input, &self.params)
            .await?;

        let summary = candidates
            .into_iter()
            .next()
            .map(|candidate| candidate.summary_text)
            .ok_or_else(|| Error::summarizer("Summarizer returned no candidates"))?;

        debug!("Produced summary of {} bytes", summary.len());

        Ok(summary)
    }
}

/// Returns the prefix of `text` holding at most `max_chars` characters.
/// Never splits a multi-byte character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
