pub mod admin;
pub mod public;
pub mod shop;

use axum::{
    http::StatusCode,
    middleware::from_fn,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::middleware::logging::{logging_middleware, to_response, ApiError};
use crate::services::ServiceError;
use crate::state::AppState;
use crate::storage::StoreError;

use admin::admin_api_router;
use public::public_api_router;
use shop::shop_api_router;

pub fn create_api_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(public_api_router(state.clone()))
        .merge(shop_api_router(state.clone()))
        .nest("/admin", admin_api_router(state));

    Router::new()
        .route("/", get(health))
        .nest("/api", api)
        .layer(from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> impl IntoResponse {
    "Portrait storefront is running"
}

/// Maps a service failure onto a status code and an `{"error": ..}` body.
pub(crate) fn error_response(err: ServiceError) -> Response {
    match err {
        ServiceError::Validation(_) => {
            let fields = err.invalid_fields();
            let message = if err.only_missing_fields() {
                "Please fill in all required fields."
            } else {
                "Please check the highlighted fields."
            };
            to_response(
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": message,
                        "fields": fields
                    })),
                ),
                Err(ApiError::ValidationFail(err.to_string())),
            )
        }
        ServiceError::NotFound(message) => to_response(
            (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": message
                })),
            ),
            Err(ApiError::NotFound(message)),
        ),
        ServiceError::InvalidCredentials => to_response(
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "Invalid username or password."
                })),
            ),
            Err(ApiError::Unauthorized(err.to_string())),
        ),
        ServiceError::Store(err) => store_error_response(err),
    }
}

pub(crate) fn store_error_response(err: StoreError) -> Response {
    to_response(
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error."
            })),
        ),
        Err(ApiError::StoreFailed(err.to_string())),
    )
}
