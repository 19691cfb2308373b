use axum::{extract::Extension, http::StatusCode, response::Response, routing::post, Json, Router};
use serde_json::json;
use std::sync::Arc;

use crate::api::error_response;
use crate::middleware::logging::to_response;
use crate::services::contact::ContactForm;
use crate::state::AppState;

pub fn contact_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/contact", post(send_message))
        .layer(Extension(state))
}

async fn send_message(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<ContactForm>,
) -> Response {
    match state.contact.submit(payload).await {
        Ok(message) => to_response(
            (
                StatusCode::CREATED,
                Json(json!({
                    "message": "Thank you for your message. We'll get back to you soon.",
                    "id": message.id
                })),
            ),
            Ok(()),
        ),
        Err(err) => error_response(err),
    }
}
