pub mod handlers;
pub mod types;

use crate::{
    Error, Result,
    config::{Config, CorsConfig},
    summarizer::{SummarizeService, build_summarizer},
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
};
use std::net::SocketAddr;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub use handlers::AppState;

pub async fn run(config: Config) -> Result<()> {
    // Backend must exist before the listener binds
    let summarizer = build_summarizer(&config.summarizer)?;
    info!(
        "Summarizer ready: provider={}, model={}",
        config.summarizer.provider, config.summarizer.model
    );

    let app_state = AppState {
        service: SummarizeService::new(summarizer),
    };

    let app = app(app_state, &config.server.cors)?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Routes without middleware.
///
/// `/summarize` accepts bodies of any size; oversized text is truncated by
/// the service, not rejected by the extractor.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::status))
        .route(
            "/summarize",
            post(handlers::summarize).layer(DefaultBodyLimit::disable()),
        )
        .with_state(state)
}

/// Routes wrapped with CORS and per-request tracing.
pub fn app(state: AppState, cors: &CorsConfig) -> Result<Router> {
    Ok(router(state)
        .layer(cors_layer(cors)?)
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    if config.allowed_origins.iter().any(|origin| origin.trim() == "*") {
        return Err(Error::config(
            "Wildcard CORS origin cannot be combined with credentials",
        ));
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| Error::config(format!("Invalid CORS origin '{}': {}", origin, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
