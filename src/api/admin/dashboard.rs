use axum::{extract::Extension, http::StatusCode, response::Response, routing::get, Json, Router};
use std::sync::Arc;

use crate::api::store_error_response;
use crate::middleware::logging::to_response;
use crate::state::AppState;

pub fn dashboard_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .layer(Extension(state))
}

async fn get_dashboard(Extension(state): Extension<Arc<AppState>>) -> Response {
    match state.admin.dashboard().await {
        Ok(dashboard) => to_response((StatusCode::OK, Json(dashboard)), Ok(())),
        Err(err) => store_error_response(err),
    }
}
