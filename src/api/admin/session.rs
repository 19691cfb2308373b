use axum::{
    extract::Extension,
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::api::{error_response, store_error_response};
use crate::middleware::auth::generate_token;
use crate::middleware::logging::{to_response, ApiError};
use crate::state::AppState;

//ROUTERS
pub fn session_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/session", get(get_session))
        .layer(Extension(state))
}

pub fn protected_session_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/logout", post(logout))
        .layer(Extension(state))
}

//ROUTES
async fn login(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<AdminLogin>,
) -> Response {
    if let Err(err) = state.admin.login(&payload.username, &payload.password).await {
        return error_response(err);
    }

    match generate_token(state.admin.username(), &state.config.secret) {
        Ok(token) => to_response(
            (
                StatusCode::OK,
                Json(json!({
                    "message": "Welcome to the admin panel!",
                    "token": token
                })),
            ),
            Ok(()),
        ),
        Err(err) => to_response(
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error"
                })),
            ),
            Err(ApiError::TokenGenerationFailed(err.to_string())),
        ),
    }
}

async fn get_session(Extension(state): Extension<Arc<AppState>>) -> Response {
    match state.admin.is_logged_in().await {
        Ok(logged_in) => to_response(
            (StatusCode::OK, Json(json!({ "loggedIn": logged_in }))),
            Ok(()),
        ),
        Err(err) => store_error_response(err),
    }
}

async fn logout(Extension(state): Extension<Arc<AppState>>) -> Response {
    match state.admin.logout().await {
        Ok(()) => to_response(
            (
                StatusCode::OK,
                Json(json!({
                    "message": "Logged out"
                })),
            ),
            Ok(()),
        ),
        Err(err) => store_error_response(err),
    }
}

//Structs
#[derive(Deserialize)]
struct AdminLogin {
    username: String,
    password: String,
}
