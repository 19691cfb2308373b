pub mod cart;
pub mod contact;
pub mod order;

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;
use cart::cart_router;
use contact::contact_router;
use order::order_router;

pub fn shop_api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(cart_router(state.clone()))
        .merge(order_router(state.clone()))
        .merge(contact_router(state))
}
