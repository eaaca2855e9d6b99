use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::app::AppState;
use crate::application::dto::tokenization_dto::{
    CountTokensRequestDto, CountTokensResponseDto, ServiceStatusDto,
};
use crate::application::services::tokenization_service::MISSING_INPUT_MESSAGE;
use crate::infrastructure::logging::logger;
use crate::presentation::errors::HttpError;
use crate::presentation::handlers::helpers::{log_request, map_http_error};

pub async fn count_tokens(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CountTokensResponseDto>, HttpError> {
    log_request("POST /count_tokens");

    // A body we cannot read carries neither field.
    let Json(body) = payload.map_err(|rejection| {
        logger::debug(&format!("Rejected count_tokens body: {}", rejection.body_text()));
        HttpError::BadRequest(MISSING_INPUT_MESSAGE.to_string())
    })?;
    let dto = parse_request(body)?;

    let service = Arc::clone(&app_state.tokenization_service);
    tokio::task::spawn_blocking(move || service.count_tokens(dto))
        .await
        .map_err(|error| {
            logger::error(&format!("Tokenization task failed: {}", error));
            HttpError::InternalServerError("Tokenization task failed".to_string())
        })?
        .map(Json)
        .map_err(map_http_error("Failed to count tokens"))
}

// Only an object can name its fields; serde would also read `[model_id, text]`.
fn parse_request(body: Value) -> Result<CountTokensRequestDto, HttpError> {
    if !body.is_object() {
        logger::debug("Rejected count_tokens body: not a JSON object");
        return Err(HttpError::BadRequest(MISSING_INPUT_MESSAGE.to_string()));
    }

    serde_json::from_value(body).map_err(|error| {
        logger::debug(&format!("Rejected count_tokens body: {}", error));
        HttpError::BadRequest(MISSING_INPUT_MESSAGE.to_string())
    })
}

/// Liveness probe; never touches a tokenizer.
pub async fn count_tokens_status() -> Json<ServiceStatusDto> {
    log_request("GET /count_tokens");
    Json(ServiceStatusDto::ok())
}
