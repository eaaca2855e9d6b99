use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::app::AppState;
use crate::application::dto::model_dto::ModelDto;
use crate::presentation::handlers::helpers::log_request;

pub async fn list_models(State(app_state): State<Arc<AppState>>) -> Json<Vec<ModelDto>> {
    log_request("GET /api/models");
    Json(app_state.model_catalog_service.list_models())
}
