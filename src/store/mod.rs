//! Data access: the per-entity repository contract and its PostgreSQL implementation.

mod postgres;

pub use postgres::{ensure_database_exists, PgStore};

use crate::error::AppError;
use crate::model::EntityId;
use async_trait::async_trait;

/// Single-row operations over one entity table. Inactive (soft-deleted) rows are invisible
/// to every method.
#[async_trait]
pub trait Repository<E>: Send + Sync {
    async fn list_all(&self) -> Result<Vec<E>, AppError>;

    /// `AppError::NotFound` when no active row has this id.
    async fn get_by_id(&self, id: EntityId) -> Result<E, AppError>;

    /// Insert the entity; on success it carries the generated id and timestamps.
    async fn create(&self, entity: &mut E) -> Result<(), AppError>;

    /// Overwrite the data columns of the row with the entity's id. An id with no row is
    /// inserted at that id; a soft-deleted row is refused with `AppError::Store`.
    async fn update(&self, entity: &mut E) -> Result<(), AppError>;

    /// Mark the row inactive. Absent ids are not an error.
    async fn delete(&self, id: EntityId) -> Result<(), AppError>;
}
