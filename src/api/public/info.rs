use axum::{http::StatusCode, response::Response, routing::get, Json, Router};

use crate::catalog::TESTIMONIALS;
use crate::links::links;
use crate::middleware::logging::to_response;

pub fn info_router() -> Router {
    Router::new()
        .route("/testimonials", get(get_testimonials))
        .route("/links", get(get_links))
}

async fn get_testimonials() -> Response {
    to_response((StatusCode::OK, Json(TESTIMONIALS)), Ok(()))
}

async fn get_links() -> Response {
    to_response((StatusCode::OK, Json(links())), Ok(()))
}
