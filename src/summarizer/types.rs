use serde::{Deserialize, Serialize};

/// Length of the produced summary is expressed in model tokens.
pub const DEFAULT_MAX_LENGTH: u32 = 150;
pub const DEFAULT_MIN_LENGTH: u32 = 30;

/// Generation bounds handed to the backend on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            min_length: DEFAULT_MIN_LENGTH,
            do_sample: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCandidate {
    pub summary_text: String,
}

/// Request body of a Hugging Face style inference call.
#[derive(Debug, Serialize)]
pub struct InferenceRequest<'a> {
    pub inputs: &'a str,
    pub parameters: GenerationParams,
    pub options: InferenceOptions,
}

#[derive(Debug, Serialize)]
pub struct InferenceOptions {
    pub wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
pub struct InferenceErrorBody {
    pub error: String,
}
