//! Pátio endpoints

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::{ApiError, PageQuery};
use crate::api::state::AppState;
use crate::hateoas::links::versioned_path;
use crate::hateoas::{pagination, PagedResult, RequestContext, Resource};
use crate::types::{CreatePatio, PatioDto, UpdatePatio};

/// GET /api/v1/patios - paginated listing with navigation links
pub async fn list_patios(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
    Query(params): Query<PageQuery>,
) -> impl IntoResponse {
    let (page, page_size) =
        pagination::normalize(params.page, params.page_size, state.config.max_page_size);
    let (patios, total) = state
        .db
        .list_patios(pagination::offset(page, page_size), page_size);
    let items: Vec<PatioDto> = patios.iter().map(PatioDto::from_record).collect();

    let mut result = PagedResult::new(items, page, page_size, total);
    result.add_collection_links(&ctx, "patios");
    Json(result)
}

/// GET /api/v1/patios/:id - single pátio with links to its zonas
pub async fn get_patio(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> Response {
    match state.db.find_patio(id) {
        Some(patio) => {
            let mut resource = Resource::new(PatioDto::from_record(&patio));
            resource.add_self(&ctx, &format!("patios/{id}"));
            resource.add_link("zonas", &ctx, &format!("zonas/patio/{id}"), "GET");
            (StatusCode::OK, Json(resource)).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found(format!("Patio {id} not found"))),
        )
            .into_response(),
    }
}

/// POST /api/v1/patios - create a pátio, 201 with Location
pub async fn create_patio(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
    Json(body): Json<CreatePatio>,
) -> impl IntoResponse {
    let patio = state.db.insert_patio(body);
    let location = versioned_path(&ctx, &format!("patios/{}", patio.id));

    let mut resource = Resource::new(PatioDto::from_record(&patio));
    resource.add_self(&ctx, &format!("patios/{}", patio.id));
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(resource),
    )
}

/// PUT /api/v1/patios/:id
pub async fn update_patio(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdatePatio>,
) -> Response {
    match state.db.update_patio(id, body) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found(format!("Patio {id} not found"))),
        )
            .into_response(),
    }
}

/// DELETE /api/v1/patios/:id - removes the pátio and cascades to its zonas
pub async fn delete_patio(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Response {
    match state.db.delete_patio(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found(format!("Patio {id} not found"))),
        )
            .into_response(),
    }
}
