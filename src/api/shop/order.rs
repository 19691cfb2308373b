use axum::{extract::Extension, http::StatusCode, response::Response, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::api::error_response;
use crate::middleware::logging::to_response;
use crate::services::order::{Checkout, OrderForm};
use crate::state::AppState;

pub fn order_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/order", post(place_order))
        .layer(Extension(state))
}

async fn place_order(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<PlaceOrder>,
) -> Response {
    match state.orders.submit(payload.form, payload.checkout).await {
        Ok(order) => to_response(
            (
                StatusCode::CREATED,
                Json(json!({
                    "message": format!("Your order {} has been received. We'll contact you soon.", order.id),
                    "order": order
                })),
            ),
            Ok(()),
        ),
        Err(err) => error_response(err),
    }
}

#[derive(Deserialize)]
struct PlaceOrder {
    #[serde(flatten)]
    form: OrderForm,
    #[serde(default)]
    checkout: Checkout,
}
