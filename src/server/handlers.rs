use super::types::{
    ErrorResponse, STATUS_MESSAGE, StatusResponse, SummarizeRequest, SummarizeResponse,
};
use crate::summarizer::SummarizeService;
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub service: SummarizeService,
}

pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: STATUS_MESSAGE.to_string(),
    })
}

pub async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = Uuid::new_v4();

    let Json(request) = payload.map_err(|rejection| {
        warn!(%request_id, "Rejected summarize request: {}", rejection.body_text());
        (
            rejection.status(),
            Json(ErrorResponse {
                detail: rejection.body_text(),
            }),
        )
    })?;

    info!(
        %request_id,
        "Received summarize request with {} characters",
        request.text.chars().count()
    );

    match state.service.summarize(&request.text).await {
        Ok(summary) => {
            info!(%request_id, "Successfully summarized request");
            Ok(Json(SummarizeResponse { summary }))
        }
        Err(e) => {
            let status = e.status_code();
            if status.is_server_error() {
                error!(%request_id, "Failed to summarize request: {}", e);
            } else {
                warn!(%request_id, "Invalid summarize request: {}", e);
            }
            Err((
                status,
                Json(ErrorResponse {
                    detail: e.to_string(),
                }),
            ))
        }
    }
}
