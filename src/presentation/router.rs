use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::app::AppState;
use crate::presentation::handlers::model_handlers::list_models;
use crate::presentation::handlers::page_handlers::{index, script, stylesheet};
use crate::presentation::handlers::tokenizer_handlers::{count_tokens, count_tokens_status};

pub fn build_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/js/script.js", get(script))
        .route("/static/css/style.css", get(stylesheet))
        .route("/api/models", get(list_models))
        .route("/count_tokens", get(count_tokens_status).post(count_tokens))
        .route("/count_tokens/", get(count_tokens_status).post(count_tokens))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
