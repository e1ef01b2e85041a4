use super::{Entity, RecordMeta};
use crate::sql::SqlValue;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct Class {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub meta: RecordMeta,
    pub class_id: i64,
    pub class_name: String,
    pub student_id: i64,
}

impl Entity for Class {
    const LABEL: &'static str = "Class";
    const TABLE: &'static str = "classes";
    const COLUMNS: &'static [&'static str] = &["class_id", "class_name", "student_id"];

    const COLUMN_DEFS: &'static [&'static str] = &[
        "\"class_id\" BIGINT NOT NULL DEFAULT 0",
        "\"class_name\" TEXT NOT NULL DEFAULT ''",
        "\"student_id\" BIGINT NOT NULL DEFAULT 0",
    ];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.class_id.into(),
            (&self.class_name).into(),
            self.student_id.into(),
        ]
    }
}
