use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use summarizer_api::{
    Error, Result,
    summarizer::{GenerationParams, Summarizer, SummaryCandidate, truncate_chars},
};

/// Mock summarizer for testing. By default it echoes the first 150
/// characters of its input, which is deterministic and never longer than
/// the input.
#[derive(Debug, Default)]
pub struct MockSummarizer {
    pub requests: Arc<Mutex<Vec<(String, GenerationParams)>>>,
    pub summary: Option<String>,
    pub error: Option<String>,
    /// `None` fails every call while `error` is set.
    pub failures_remaining: Option<Arc<Mutex<usize>>>,
    pub empty: bool,
}

impl MockSummarizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Fails the next `count` calls with `error`, then recovers.
    pub fn failing_times(mut self, count: usize, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self.failures_remaining = Some(Arc::new(Mutex::new(count)));
        self
    }

    pub fn with_no_candidates(mut self) -> Self {
        self.empty = true;
        self
    }

    pub fn get_requests(&self) -> Vec<(String, GenerationParams)> {
        self.requests.lock().unwrap().clone()
    }

    fn should_fail(&self) -> bool {
        if self.error.is_none() {
            return false;
        }
        match self.failures_remaining {
            None => true,
            Some(ref remaining) => {
                let mut remaining = remaining.lock().unwrap();
                if *remaining > 0 {
                    *remaining -= 1;
                    true
                } else {
                    false
                }
            }
        }
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize_candidates(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> Result<Vec<SummaryCandidate>> {
        self.requests
            .lock()
            .unwrap()
            .push((text.to_string(), *params));

        if self.should_fail() {
            let error = self.error.clone().unwrap_or_default();
            return Err(Error::summarizer(error));
        }

        if self.empty {
            return Ok(Vec::new());
        }

        let summary_text = self
            .summary
            .clone()
            .unwrap_or_else(|| truncate_chars(text, 150).to_string());

        Ok(vec![
            SummaryCandidate { summary_text },
            SummaryCandidate {
                summary_text: "second candidate".to_string(),
            },
        ])
    }
}
