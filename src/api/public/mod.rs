pub mod artwork;
pub mod category;
pub mod info;

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;
use artwork::artwork_router;
use category::category_router;
use info::info_router;

pub fn public_api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(artwork_router(state.clone()))
        .merge(category_router())
        .merge(info_router())
}
