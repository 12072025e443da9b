//! HTTP server setup with Axum

use std::sync::Arc;

use axum::routing::get;
use axum::{middleware, Extension, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::auth::require_api_key;
use super::rest::{analytics, motos, patios, zonas};
use super::state::AppState;
use crate::hateoas::ApiVersion;

/// Create the Axum router with all endpoints.
///
/// The versioned subtree sits behind the API-key filter and records its
/// mounted version so link builders render the right segment; `/` and
/// `/health` stay open.
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let v1 = Router::new()
        .route(
            "/patios",
            get(patios::list_patios).post(patios::create_patio),
        )
        .route(
            "/patios/:id",
            get(patios::get_patio)
                .put(patios::update_patio)
                .delete(patios::delete_patio),
        )
        .route("/zonas", get(zonas::list_zonas).post(zonas::create_zona))
        .route(
            "/zonas/:id",
            get(zonas::get_zona)
                .put(zonas::update_zona)
                .delete(zonas::delete_zona),
        )
        .route("/zonas/patio/:patio_id", get(zonas::zonas_by_patio))
        .route("/motos", get(motos::list_motos).post(motos::create_moto))
        .route(
            "/motos/:id",
            get(motos::get_moto)
                .put(motos::update_moto)
                .delete(motos::delete_moto),
        )
        .route("/motos/zona/:zona_id", get(motos::motos_by_zona))
        .route("/motos/:id/mover", axum::routing::post(motos::move_moto))
        .route(
            "/analytics/maintenance-prediction",
            axum::routing::post(analytics::maintenance_prediction),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ))
        .layer(Extension(ApiVersion::V1));

    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .nest("/api/v1", v1)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[derive(Serialize)]
struct ServiceInfo {
    name: &'static str,
    version: &'static str,
}

/// Service identification at the unversioned root
async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: crate::NAME,
        version: crate::VERSION,
    })
}
