use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

use crate::state::AppState;

pub const ADMIN_ROLE: &str = "admin";
const TOKEN_LIFETIME_HOURS: i64 = 24;

/// Admin routes need a valid bearer token and a live session flag.
/// Logging out clears the flag, which retires every token issued before.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    let token = match auth_header.and_then(|header| header.strip_prefix("Bearer ")) {
        Some(token) => token,
        None => {
            debug!("Missing bearer token");
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    let claims = match validate_token(token, &state.config.secret) {
        Ok(claims) => claims,
        Err(err) => {
            debug!(error = %err, "Rejected admin token");
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    match state.admin.is_logged_in().await {
        Ok(true) => {}
        Ok(false) => {
            debug!(user = %claims.sub, "Token presented without an active session");
            return Err(StatusCode::UNAUTHORIZED);
        }
        Err(err) => {
            error!(error = %err, "Failed to read admin session");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
}

pub fn generate_token(username: &str, secret: &str) -> Result<String, AuthMiddlewareError> {
    let exp = Utc::now()
        .checked_add_signed(Duration::hours(TOKEN_LIFETIME_HOURS))
        .ok_or(AuthMiddlewareError::GenerationFail)?
        .timestamp() as usize;

    let claims = Claims {
        sub: username.to_owned(),
        role: ADMIN_ROLE.to_owned(),
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthMiddlewareError::GenerationFail)
}

pub fn validate_token(token: &str, secret: &str) -> Result<Claims, AuthMiddlewareError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| AuthMiddlewareError::TokenExpired)?;

    let claims = token_data.claims;
    if claims.role != ADMIN_ROLE {
        return Err(AuthMiddlewareError::InvalidUserOrRole);
    }
    Ok(claims)
}

#[derive(Error, Debug)]
pub enum AuthMiddlewareError {
    #[error("Invalid user id or role")]
    InvalidUserOrRole,
    #[error("Token expired or malformed")]
    TokenExpired,
    #[error("Failed to generate token")]
    GenerationFail,
}
