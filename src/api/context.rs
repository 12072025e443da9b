//! Per-request context extraction
//!
//! Builds the [`RequestContext`] the link builders consume: scheme from the
//! `x-forwarded-proto` header (plain `http` when absent), host from the
//! `Host` header, and the API version the router recorded for the matched
//! subtree. Extraction never fails; links degrade to `http://localhost`
//! defaults rather than rejecting the request.

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use crate::hateoas::{ApiVersion, RequestContext};

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let scheme = parts
            .headers
            .get("x-forwarded-proto")
            .and_then(|value| value.to_str().ok())
            .unwrap_or("http");

        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("localhost");

        let version = parts.extensions.get::<ApiVersion>().copied();

        Ok(RequestContext::new(scheme, host, version))
    }
}
