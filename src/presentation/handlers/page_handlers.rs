use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};

use crate::app::AppState;
use crate::presentation::handlers::helpers::log_request;
use crate::presentation::pages;

pub async fn index(State(app_state): State<Arc<AppState>>) -> Html<String> {
    log_request("GET /");
    Html(pages::render_index(
        &app_state.model_catalog_service.list_models(),
    ))
}

pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        pages::SCRIPT,
    )
}

pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], pages::STYLESHEET)
}
