//! REST handlers for the versioned API surface
//!
//! Every listing endpoint follows the same shape: normalize the raw
//! pagination input, query the store with the derived offset/limit, map
//! records to DTOs, and wrap them in an envelope whose links the request
//! context drives. Single resources go through [`crate::hateoas::Resource`]
//! instead.

pub mod analytics;
pub mod motos;
pub mod patios;
pub mod zonas;

use serde::{Deserialize, Serialize};

/// Raw pagination query parameters; always normalized before use
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}
