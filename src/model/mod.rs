//! Entity records: School, Class, Student and the metadata every row carries.

mod class;
mod school;
mod student;

pub use class::Class;
pub use school::School;
pub use student::{Address, Student};

use crate::sql::SqlValue;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::FromRow;

/// Primary key type of every entity table (BIGSERIAL).
pub type EntityId = i64;

/// Generated columns: identifier, timestamps and the soft-delete marker.
/// Values supplied in a request body are ignored by the store.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct RecordMeta {
    pub id: EntityId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl RecordMeta {
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

/// A record type persisted as one row of its own table.
pub trait Entity:
    Clone + Send + Sync + Unpin + Serialize + DeserializeOwned + for<'r> FromRow<'r, PgRow> + 'static
{
    /// Display name used in messages ("School").
    const LABEL: &'static str;
    const TABLE: &'static str;
    /// Writable columns, in the order `values` returns them.
    const COLUMNS: &'static [&'static str];
    /// DDL for each entry of `COLUMNS`, same order.
    const COLUMN_DEFS: &'static [&'static str];

    fn meta(&self) -> &RecordMeta;
    fn meta_mut(&mut self) -> &mut RecordMeta;
    fn values(&self) -> Vec<SqlValue>;

    fn id(&self) -> EntityId {
        self.meta().id
    }
}
