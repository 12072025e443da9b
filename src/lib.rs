//! Yard API
//!
//! Inventory-tracking REST service for logistics yards (pátios), their zones
//! (zonas) and the motorcycles (motos) parked in them.
//!
//! # Features
//!
//! - **Versioned endpoints**: everything mounted under `/api/v1`
//! - **HATEOAS envelopes**: every response carries self/relation links and
//!   paginated collections carry prev/next navigation
//! - **API-key authentication**: shared secret in the `X-API-Key` header
//! - **Maintenance prediction**: a toy logistic-regression helper
//!
//! # Modules
//!
//! - `hateoas`: pagination normalization, link building and the generic
//!   response envelopes (the reusable core)
//! - `types`: domain records and wire DTOs
//! - `yard`: thread-safe in-memory record store
//! - `prediction`: the maintenance predictor
//! - `api`: router, auth filter, request context and REST handlers
//! - `config`: environment-driven settings
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use yard_api::api::http::create_router;
//! use yard_api::api::state::AppState;
//! use yard_api::config::Config;
//! use yard_api::yard::YardDb;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env().unwrap();
//!     let state = Arc::new(AppState::new(Arc::new(YardDb::seeded()), config.clone()));
//!     let app = create_router(state);
//!
//!     let listener = tokio::net::TcpListener::bind(config.bind_addr).await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod config;
pub mod hateoas;
pub mod prediction;
pub mod types;
pub mod yard;

// Re-export commonly used items at crate root
pub use config::Config;
pub use hateoas::{ApiVersion, Link, PagedResult, RequestContext, Resource};
pub use yard::YardDb;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
