//! Entity CRUD handlers: list, read, create, update, delete. Generic over the entity type;
//! the service handle is pulled from `AppState` by `FromRef`.

use crate::error::AppError;
use crate::extractors::{EntityPath, JsonBody};
use crate::model::Entity;
use crate::response::{created, deleted, ok};
use crate::service::CrudService;
use axum::{extract::State, response::IntoResponse};

pub async fn list<E: Entity>(
    State(service): State<CrudService<E>>,
) -> Result<impl IntoResponse, AppError> {
    let rows = service.list_all().await?;
    Ok(ok(rows))
}

pub async fn read<E: Entity>(
    State(service): State<CrudService<E>>,
    path: EntityPath<E>,
) -> Result<impl IntoResponse, AppError> {
    let row = service.get_by_id(path.id()).await?;
    Ok(ok(row))
}

pub async fn create<E: Entity>(
    State(service): State<CrudService<E>>,
    JsonBody(mut entity): JsonBody<E>,
) -> Result<impl IntoResponse, AppError> {
    service.create(&mut entity).await?;
    tracing::info!(entity = E::LABEL, id = entity.id(), "created");
    Ok(created(entity))
}

/// The path id wins over any id in the body.
pub async fn update<E: Entity>(
    State(service): State<CrudService<E>>,
    path: EntityPath<E>,
    JsonBody(mut entity): JsonBody<E>,
) -> Result<impl IntoResponse, AppError> {
    entity.meta_mut().id = path.id();
    service.update(&mut entity).await?;
    Ok(ok(entity))
}

pub async fn delete<E: Entity>(
    State(service): State<CrudService<E>>,
    path: EntityPath<E>,
) -> Result<impl IntoResponse, AppError> {
    service.delete(path.id()).await?;
    tracing::info!(entity = E::LABEL, id = path.id(), "deleted");
    Ok(deleted(E::LABEL))
}
