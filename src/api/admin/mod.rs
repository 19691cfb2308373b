pub mod dashboard;
pub mod message;
pub mod order;
pub mod session;

use axum::{middleware::from_fn_with_state, Router};
use std::sync::Arc;

use crate::middleware::auth::auth_middleware;
use crate::state::AppState;
use dashboard::dashboard_router;
use message::admin_message_router;
use order::admin_order_router;
use session::{protected_session_router, session_router};

pub fn admin_api_router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .merge(dashboard_router(state.clone()))
        .merge(admin_order_router(state.clone()))
        .merge(admin_message_router(state.clone()))
        .merge(protected_session_router(state.clone()))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(session_router(state))
        .merge(protected)
}
