//! Resource CRUD handlers, generic over the resource type.

use crate::error::AppError;
use crate::extractors::{RecordId, Validated};
use crate::model::Resource;
use crate::response::{created, no_content, ok, ok_many};
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;

fn not_found<R: Resource>(id: i64) -> AppError {
    AppError::NotFound(format!("{}/{}", R::DEF.path_segment, id))
}

/// GET /api/{resource}
pub async fn list<R: Resource>(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CrudService::list::<R>(state.store.as_ref()).await?;
    Ok(ok_many(rows))
}

/// GET /api/{resource}/:id
pub async fn read<R: Resource>(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    let row = CrudService::read::<R>(state.store.as_ref(), id)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;
    Ok(ok(row))
}

/// POST /api/{resource}
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    Validated(payload): Validated<R>,
) -> Result<impl IntoResponse, AppError> {
    let row = CrudService::create::<R>(state.store.as_ref(), payload).await?;
    Ok(created(row))
}

/// PUT /api/{resource}/:id — full replacement.
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    Validated(payload): Validated<R>,
) -> Result<impl IntoResponse, AppError> {
    if !CrudService::update::<R>(state.store.as_ref(), id, &payload).await? {
        return Err(not_found::<R>(id));
    }
    Ok(no_content())
}

/// DELETE /api/{resource}/:id
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    if !CrudService::delete::<R>(state.store.as_ref(), id).await? {
        return Err(not_found::<R>(id));
    }
    Ok(no_content())
}
