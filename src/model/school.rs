use super::{Entity, RecordMeta};
use crate::sql::SqlValue;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct School {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub meta: RecordMeta,
    pub name: String,
    /// Not enforced as a foreign key.
    pub class_id: i64,
}

impl Entity for School {
    const LABEL: &'static str = "School";
    const TABLE: &'static str = "schools";
    const COLUMNS: &'static [&'static str] = &["name", "class_id"];

    const COLUMN_DEFS: &'static [&'static str] = &[
        "\"name\" TEXT NOT NULL DEFAULT ''",
        "\"class_id\" BIGINT NOT NULL DEFAULT 0",
    ];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![(&self.name).into(), self.class_id.into()]
    }
}
