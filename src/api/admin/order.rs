use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::Response,
    routing::{get, patch},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::api::{error_response, store_error_response};
use crate::middleware::logging::to_response;
use crate::services::order::OrderStatus;
use crate::state::AppState;

//ROUTERS
pub fn admin_order_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/orders", get(get_orders))
        .route("/orders/:id", patch(patch_order).delete(delete_order))
        .layer(Extension(state))
}

//ROUTES
async fn get_orders(
    Query(params): Query<OrdersQuery>,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    match state.admin.orders(params.status).await {
        Ok(orders) => to_response((StatusCode::OK, Json(orders)), Ok(())),
        Err(err) => store_error_response(err),
    }
}

async fn patch_order(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<PatchOrder>,
) -> Response {
    match state.admin.set_order_status(&id, payload.status).await {
        Ok(order) => to_response((StatusCode::OK, Json(order)), Ok(())),
        Err(err) => error_response(err),
    }
}

async fn delete_order(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    match state.admin.delete_order(&id).await {
        Ok(()) => to_response(
            (
                StatusCode::OK,
                Json(json!({
                    "message": "Order has been deleted successfully."
                })),
            ),
            Ok(()),
        ),
        Err(err) => error_response(err),
    }
}

//Structs
#[derive(Deserialize)]
struct OrdersQuery {
    status: Option<OrderStatus>,
}

#[derive(Deserialize)]
struct PatchOrder {
    status: OrderStatus,
}
