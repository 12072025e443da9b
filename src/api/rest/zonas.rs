//! Zona endpoints

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::{ApiError, PageQuery};
use crate::api::state::AppState;
use crate::hateoas::links::versioned_path;
use crate::hateoas::{pagination, PagedResult, RequestContext, Resource};
use crate::types::{CreateZona, UpdateZona, ZonaDto};

/// GET /api/v1/zonas - paginated listing with the pátio name resolved
pub async fn list_zonas(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
    Query(params): Query<PageQuery>,
) -> impl IntoResponse {
    let (page, page_size) =
        pagination::normalize(params.page, params.page_size, state.config.max_page_size);
    let (zonas, total) = state
        .db
        .list_zonas(pagination::offset(page, page_size), page_size);
    let items: Vec<ZonaDto> = zonas.iter().map(ZonaDto::from_view).collect();

    let mut result = PagedResult::new(items, page, page_size, total);
    result.add_collection_links(&ctx, "zonas");
    Json(result)
}

/// GET /api/v1/zonas/:id - single zona with links to its motos and pátio
pub async fn get_zona(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> Response {
    match state.db.find_zona(id) {
        Some(view) => {
            let patio_id = view.zona.patio_id;
            let mut resource = Resource::new(ZonaDto::from_view(&view));
            resource.add_self(&ctx, &format!("zonas/{id}"));
            resource.add_link("motos", &ctx, &format!("motos/zona/{id}"), "GET");
            resource.add_link("patio", &ctx, &format!("patios/{patio_id}"), "GET");
            (StatusCode::OK, Json(resource)).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found(format!("Zona {id} not found"))),
        )
            .into_response(),
    }
}

/// GET /api/v1/zonas/patio/:patio_id - a pátio's zonas as one page
pub async fn zonas_by_patio(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
    Path(patio_id): Path<i64>,
) -> Response {
    match state.db.zonas_by_patio(patio_id) {
        Some(views) => {
            let items: Vec<ZonaDto> = views.iter().map(ZonaDto::from_view).collect();
            let count = items.len() as i64;
            // one page covering every item, so no prev/next links appear
            let mut result = PagedResult::new(items, 1, count.max(1), count);
            result.add_collection_links(&ctx, &format!("zonas/patio/{patio_id}"));
            (StatusCode::OK, Json(result)).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found(format!("Patio {patio_id} not found"))),
        )
            .into_response(),
    }
}

/// POST /api/v1/zonas - create a zona inside an existing pátio
pub async fn create_zona(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
    Json(body): Json<CreateZona>,
) -> Response {
    match state.db.insert_zona(body) {
        Ok(view) => {
            let id = view.zona.id;
            let location = versioned_path(&ctx, &format!("zonas/{id}"));
            let mut resource = Resource::new(ZonaDto::from_view(&view));
            resource.add_self(&ctx, &format!("zonas/{id}"));
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(resource),
            )
                .into_response()
        }
        Err(_) => (
            StatusCode::BAD_REQUEST,
            Json(ApiError::bad_request("PatioId inválido")),
        )
            .into_response(),
    }
}

/// PUT /api/v1/zonas/:id - rename a zona
pub async fn update_zona(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateZona>,
) -> Response {
    match state.db.update_zona(id, body) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found(format!("Zona {id} not found"))),
        )
            .into_response(),
    }
}

/// DELETE /api/v1/zonas/:id - motos parked here become unallocated
pub async fn delete_zona(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Response {
    match state.db.delete_zona(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found(format!("Zona {id} not found"))),
        )
            .into_response(),
    }
}
