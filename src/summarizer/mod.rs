mod client;
mod service;
mod types;

pub use client::{HuggingFaceSummarizer, Summarizer, build_summarizer};
pub use service::{MAX_INPUT_CHARS, SummarizeService, TEXT_REQUIRED, truncate_chars};
pub use types::*;
