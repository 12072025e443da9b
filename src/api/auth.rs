//! API-key authentication
//!
//! Every versioned API route requires the shared secret in the `X-API-Key`
//! header. The comparison is exact; a missing or wrong key is a 401 with an
//! empty body. A service running without a configured key refuses all
//! versioned requests with a 500 instead of silently allowing them.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::rest::ApiError;
use super::state::AppState;

/// Header carrying the shared-secret API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Reject requests that do not carry the configured API key
pub async fn require_api_key(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let expected = state.config.api_key.as_str();
    if expected.is_empty() {
        tracing::error!("API key is not configured, rejecting request");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::internal("API key is not configured")),
        )
            .into_response();
    }

    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match provided {
        Some(key) if key == expected => next.run(request).await,
        _ => StatusCode::UNAUTHORIZED.into_response(),
    }
}
