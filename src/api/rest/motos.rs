//! Moto endpoints

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::{ApiError, PageQuery};
use crate::api::state::AppState;
use crate::hateoas::links::versioned_path;
use crate::hateoas::{pagination, PagedResult, RequestContext, Resource};
use crate::types::{CreateMoto, MotoDto, MoveMoto, UpdateMoto};
use crate::yard::WriteError;

/// GET /api/v1/motos - paginated listing with zona and pátio resolved
pub async fn list_motos(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
    Query(params): Query<PageQuery>,
) -> impl IntoResponse {
    let (page, page_size) =
        pagination::normalize(params.page, params.page_size, state.config.max_page_size);
    let (motos, total) = state
        .db
        .list_motos(pagination::offset(page, page_size), page_size);
    let items: Vec<MotoDto> = motos.iter().map(MotoDto::from_view).collect();

    let mut result = PagedResult::new(items, page, page_size, total);
    result.add_collection_links(&ctx, "motos");
    Json(result)
}

/// GET /api/v1/motos/:id - single moto; the zona link exists only when
/// the moto is allocated
pub async fn get_moto(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> Response {
    match state.db.find_moto(id) {
        Some(view) => {
            let zona_id = view.moto.zona_id;
            let mut resource = Resource::new(MotoDto::from_view(&view));
            resource.add_self(&ctx, &format!("motos/{id}"));
            if let Some(zona_id) = zona_id {
                resource.add_link("zona", &ctx, &format!("zonas/{zona_id}"), "GET");
            }
            (StatusCode::OK, Json(resource)).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found(format!("Moto {id} not found"))),
        )
            .into_response(),
    }
}

/// GET /api/v1/motos/zona/:zona_id - a zona's motos as one page
pub async fn motos_by_zona(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
    Path(zona_id): Path<i64>,
) -> Response {
    match state.db.motos_by_zona(zona_id) {
        Some(views) => {
            let items: Vec<MotoDto> = views.iter().map(MotoDto::from_view).collect();
            let count = items.len() as i64;
            let mut result = PagedResult::new(items, 1, count.max(1), count);
            result.add_collection_links(&ctx, &format!("motos/zona/{zona_id}"));
            (StatusCode::OK, Json(result)).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found(format!("Zona {zona_id} not found"))),
        )
            .into_response(),
    }
}

/// POST /api/v1/motos - register a moto; the zona is optional
pub async fn create_moto(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
    Json(body): Json<CreateMoto>,
) -> Response {
    match state.db.insert_moto(body) {
        Ok(view) => {
            let id = view.moto.id;
            let location = versioned_path(&ctx, &format!("motos/{id}"));
            let mut resource = Resource::new(MotoDto::from_view(&view));
            resource.add_self(&ctx, &format!("motos/{id}"));
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(resource),
            )
                .into_response()
        }
        Err(_) => (
            StatusCode::BAD_REQUEST,
            Json(ApiError::bad_request("ZonaId inválida")),
        )
            .into_response(),
    }
}

/// PUT /api/v1/motos/:id - update data and location
pub async fn update_moto(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateMoto>,
) -> Response {
    match state.db.update_moto(id, body) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(WriteError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found(format!("Moto {id} not found"))),
        )
            .into_response(),
        Err(WriteError::DanglingReference) => (
            StatusCode::BAD_REQUEST,
            Json(ApiError::bad_request("ZonaId inválida")),
        )
            .into_response(),
    }
}

/// DELETE /api/v1/motos/:id
pub async fn delete_moto(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Response {
    match state.db.delete_moto(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found(format!("Moto {id} not found"))),
        )
            .into_response(),
    }
}

/// POST /api/v1/motos/:id/mover - business action: relocate a moto
pub async fn move_moto(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<MoveMoto>,
) -> Response {
    match state.db.move_moto(id, body.new_zona_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(WriteError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found(format!("Moto {id} not found"))),
        )
            .into_response(),
        Err(WriteError::DanglingReference) => (
            StatusCode::BAD_REQUEST,
            Json(ApiError::bad_request("NovaZonaId inválida")),
        )
            .into_response(),
    }
}
