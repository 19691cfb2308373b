use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::{fmt, time::Instant};
use tracing::{debug, error, info};

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed = start.elapsed();
    match response.extensions().get::<Result<(), ApiError>>() {
        Some(Ok(_)) => info!(
            method = %method,
            uri = %uri,
            status = %status,
            elapsed = ?elapsed,
            "Processed request"
        ),
        Some(Err(value)) => error!(
            method = %method,
            uri = %uri,
            status = %status,
            elapsed = ?elapsed,
            value = %value,
            "Failed to process request"
        ),
        None => debug!(
            method = %method,
            uri = %uri,
            status = %status,
            elapsed = ?elapsed,
            "Processed request without an outcome extension"
        ),
    }

    response
}

#[derive(Clone, Debug)]
pub enum ApiError {
    StoreFailed(String),
    ValidationFail(String),
    NotFound(String),
    Unauthorized(String),
    TokenGenerationFailed(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::StoreFailed(value) => write!(f, "Store error: {value}"),
            ApiError::ValidationFail(value) => write!(f, "Failed to validate: {value}"),
            ApiError::NotFound(value) => write!(f, "Not found: {value}"),
            ApiError::Unauthorized(value) => write!(f, "Unauthorized: {value}"),
            ApiError::TokenGenerationFailed(value) => write!(f, "Failed to generate token: {value}"),
        }
    }
}

pub fn to_response<T: IntoResponse>(
    response: T,               //The response that we are sending + StatusCode
    ext: Result<(), ApiError>, //The extension, that we want to give logging middleware
) -> Response {
    let mut response = response.into_response();

    response.extensions_mut().insert(ext);

    response
}
