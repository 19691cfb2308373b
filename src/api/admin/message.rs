use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Response,
    routing::{delete, get},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

use crate::api::{error_response, store_error_response};
use crate::middleware::logging::to_response;
use crate::state::AppState;

pub fn admin_message_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/messages", get(get_messages))
        .route("/messages/:id", delete(delete_message))
        .layer(Extension(state))
}

async fn get_messages(Extension(state): Extension<Arc<AppState>>) -> Response {
    match state.admin.messages().await {
        Ok(messages) => to_response((StatusCode::OK, Json(messages)), Ok(())),
        Err(err) => store_error_response(err),
    }
}

async fn delete_message(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    match state.admin.delete_message(&id).await {
        Ok(()) => to_response(
            (
                StatusCode::OK,
                Json(json!({
                    "message": "Message has been deleted successfully."
                })),
            ),
            Ok(()),
        ),
        Err(err) => error_response(err),
    }
}
