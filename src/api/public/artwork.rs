use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::catalog::{Artwork, BrowseQuery, CategoryFilter};
use crate::middleware::logging::{to_response, ApiError};
use crate::state::AppState;

pub fn artwork_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/artwork", get(get_artworks))
        .route("/artwork/:id", get(get_artwork))
        .route("/portfolio", get(get_portfolio))
        .layer(Extension(state))
}

async fn get_artworks(
    Query(params): Query<BrowseQuery>,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    let found: Vec<&Artwork> = state.catalog.browse(&params);
    to_response((StatusCode::OK, Json(found)), Ok(()))
}

async fn get_artwork(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    match state.catalog.find(&id) {
        Some(artwork) => to_response((StatusCode::OK, Json(artwork)), Ok(())),
        None => {
            let message = format!("No artwork with {} id was found.", id);
            to_response(
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({
                        "error": message
                    })),
                ),
                Err(ApiError::NotFound(message)),
            )
        }
    }
}

async fn get_portfolio(
    Query(params): Query<PortfolioQuery>,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    let found = state.catalog.portfolio(params.category);
    to_response((StatusCode::OK, Json(found)), Ok(()))
}

#[derive(Deserialize)]
struct PortfolioQuery {
    #[serde(default)]
    category: CategoryFilter,
}
