use super::mocks::MockSummarizer;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use serde_json::Value;
use std::sync::Arc;
use summarizer_api::{
    Result,
    config::{Config, CorsConfig, LogsConfig, ServerConfig, SummarizerConfig},
    server::{self, AppState},
    summarizer::SummarizeService,
};
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
            cors: CorsConfig::default(),
        },
        summarizer: SummarizerConfig {
            provider: "huggingface".to_string(),
            base_url: "http://localhost:9999".to_string(),
            api_key: Some("hf_test".to_string()),
            model: "sshleifer/distilbart-cnn-12-6".to_string(),
            timeout_secs: 5,
        },
    }
}

/// Build the full application (CORS + tracing) around a mock summarizer.
/// The mock is returned so tests can inspect what it received.
pub fn create_test_app(mock: MockSummarizer) -> (Router, Arc<MockSummarizer>) {
    let mock = Arc::new(mock);
    let state = AppState {
        service: SummarizeService::new(mock.clone()),
    };
    let app = server::app(state, &create_test_config().server.cors).unwrap();
    (app, mock)
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"
  cors:
    allowed_origins:
      - "https://summarizer.example.com"

summarizer:
  provider: "huggingface"
  base_url: "http://localhost:8081"
  api_key: "hf_test"
  model: "t5-small"
  timeout_secs: 30
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
