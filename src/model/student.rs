use super::{Entity, RecordMeta};
use crate::sql::SqlValue;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Postal address, stored inline as the `street`, `city` and `state` columns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct Student {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub meta: RecordMeta,
    /// Informational number, unrelated to `meta.id`.
    pub student_id: i64,
    pub name: String,
    pub marks: i64,
    #[sqlx(flatten)]
    pub address: Address,
}

impl Entity for Student {
    const LABEL: &'static str = "Student";
    const TABLE: &'static str = "students";
    const COLUMNS: &'static [&'static str] =
        &["student_id", "name", "marks", "street", "city", "state"];

    const COLUMN_DEFS: &'static [&'static str] = &[
        "\"student_id\" BIGINT NOT NULL DEFAULT 0",
        "\"name\" TEXT NOT NULL DEFAULT ''",
        "\"marks\" BIGINT NOT NULL DEFAULT 0",
        "\"street\" TEXT NOT NULL DEFAULT ''",
        "\"city\" TEXT NOT NULL DEFAULT ''",
        "\"state\" TEXT NOT NULL DEFAULT ''",
    ];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.student_id.into(),
            (&self.name).into(),
            self.marks.into(),
            (&self.address.street).into(),
            (&self.address.city).into(),
            (&self.address.state).into(),
        ]
    }
}
