use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Response,
    routing::{get, patch},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use crate::api::{error_response, store_error_response};
use crate::middleware::logging::to_response;
use crate::services::ServiceError;
use crate::state::AppState;

//ROUTERS
pub fn cart_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/cart", get(get_cart).post(add_item).delete(clear_cart))
        .route("/cart/count", get(get_count))
        .route("/cart/:id", patch(patch_entry).delete(remove_item))
        .layer(Extension(state))
}

//ROUTES
async fn get_cart(Extension(state): Extension<Arc<AppState>>) -> Response {
    match state.cart.view().await {
        Ok(view) => to_response((StatusCode::OK, Json(view)), Ok(())),
        Err(err) => store_error_response(err),
    }
}

async fn get_count(Extension(state): Extension<Arc<AppState>>) -> Response {
    let count = state.cart.totals().count;
    to_response((StatusCode::OK, Json(json!({ "count": count }))), Ok(()))
}

async fn add_item(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<AddItem>,
) -> Response {
    debug!(artwork_id = %payload.artwork_id, "->> Called `add_item`");
    let Some(artwork) = state.catalog.find(&payload.artwork_id) else {
        return error_response(ServiceError::NotFound(format!(
            "No artwork with {} id was found.",
            payload.artwork_id
        )));
    };

    match state.cart.add(artwork).await {
        Ok(view) => to_response(
            (
                StatusCode::CREATED,
                Json(json!({
                    "message": format!("{} has been added to your cart.", artwork.title),
                    "cart": view
                })),
            ),
            Ok(()),
        ),
        Err(err) => store_error_response(err),
    }
}

async fn patch_entry(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<PatchCart>,
) -> Response {
    match state.cart.set_quantity(&id, payload.quantity).await {
        Ok(view) => to_response((StatusCode::OK, Json(view)), Ok(())),
        Err(err) => error_response(err),
    }
}

async fn remove_item(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    match state.cart.remove(&id).await {
        Ok(view) => to_response((StatusCode::OK, Json(view)), Ok(())),
        Err(err) => error_response(err),
    }
}

async fn clear_cart(Extension(state): Extension<Arc<AppState>>) -> Response {
    match state.cart.clear().await {
        Ok(()) => to_response(
            (
                StatusCode::OK,
                Json(json!({
                    "message": "All items have been removed from your cart."
                })),
            ),
            Ok(()),
        ),
        Err(err) => store_error_response(err),
    }
}

//Structs
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct AddItem {
    artwork_id: String,
}

#[derive(Deserialize)]
struct PatchCart {
    quantity: i64,
}
