use axum::{http::StatusCode, response::Response, routing::get, Json, Router};

use crate::catalog::Catalog;
use crate::middleware::logging::to_response;

pub fn category_router() -> Router {
    Router::new().route("/category", get(get_categories))
}

async fn get_categories() -> Response {
    to_response((StatusCode::OK, Json(Catalog::category_tags())), Ok(()))
}
