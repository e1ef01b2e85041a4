//! Per-entity service seam between the HTTP handlers and the store.

use crate::error::AppError;
use crate::model::{Entity, EntityId};
use crate::store::Repository;
use std::sync::Arc;

pub struct CrudService<E> {
    repo: Arc<dyn Repository<E>>,
}

impl<E> Clone for CrudService<E> {
    fn clone(&self) -> Self {
        CrudService {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<E: Entity> CrudService<E> {
    pub fn new(repo: Arc<dyn Repository<E>>) -> Self {
        CrudService { repo }
    }

    pub async fn list_all(&self) -> Result<Vec<E>, AppError> {
        self.repo.list_all().await
    }

    pub async fn get_by_id(&self, id: EntityId) -> Result<E, AppError> {
        self.repo.get_by_id(id).await
    }

    /// On success `entity` carries its generated id and timestamps.
    pub async fn create(&self, entity: &mut E) -> Result<(), AppError> {
        self.repo.create(entity).await
    }

    pub async fn update(&self, entity: &mut E) -> Result<(), AppError> {
        self.repo.update(entity).await
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), AppError> {
        self.repo.delete(id).await
    }
}
