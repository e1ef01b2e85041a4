//! Builds parameterized SELECT, INSERT, upsert and soft-delete statements for an entity table.
//! Reads, upsert conflicts and the soft delete carry the `deleted_at IS NULL` predicate.

use super::SqlValue;
use crate::model::Entity;

/// Generated columns returned by INSERT/UPDATE and selected ahead of the entity columns.
const META_COLUMNS: &str = "\"id\", \"created_at\", \"updated_at\", \"deleted_at\"";

const ACTIVE: &str = "\"deleted_at\" IS NULL";

/// Quote identifier for PostgreSQL (safe: only from entity definitions and settings).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
pub fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

fn select_column_list<E: Entity>() -> String {
    let mut cols = String::from(META_COLUMNS);
    for c in E::COLUMNS {
        cols.push_str(", ");
        cols.push_str(&quoted(c));
    }
    cols
}

/// SELECT all active rows ordered by id.
pub fn select_list<E: Entity>(schema: &str) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} ORDER BY \"id\"",
        select_column_list::<E>(),
        qualified_table(schema, E::TABLE),
        ACTIVE
    )
}

/// SELECT one active row; $1 is the id.
pub fn select_by_id<E: Entity>(schema: &str) -> String {
    format!(
        "SELECT {} FROM {} WHERE \"id\" = $1 AND {}",
        select_column_list::<E>(),
        qualified_table(schema, E::TABLE),
        ACTIVE
    )
}

/// INSERT the writable columns; the id and timestamps come from column defaults.
pub fn insert<E: Entity>(schema: &str, entity: &E) -> QueryBuf {
    let cols: Vec<String> = E::COLUMNS.iter().map(|c| quoted(c)).collect();
    let placeholders: Vec<String> = (1..=cols.len()).map(|n| format!("${}", n)).collect();
    QueryBuf {
        sql: format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            qualified_table(schema, E::TABLE),
            cols.join(", "),
            placeholders.join(", "),
            META_COLUMNS
        ),
        params: entity.values(),
    }
}

/// Write every column of the row with the entity's id. An id with no row is inserted at
/// that id; a soft-deleted row is left untouched and no row is returned. `inserted` tells
/// the two writes apart.
pub fn upsert<E: Entity>(schema: &str, entity: &E) -> QueryBuf {
    let mut params = entity.values();
    params.push(SqlValue::BigInt(entity.id()));
    let mut cols = vec![quoted("id")];
    cols.extend(E::COLUMNS.iter().map(|c| quoted(c)));
    let mut placeholders = vec![format!("${}", params.len())];
    placeholders.extend((1..params.len()).map(|n| format!("${}", n)));
    let sets: Vec<String> = E::COLUMNS
        .iter()
        .map(|c| format!("{0} = EXCLUDED.{0}", quoted(c)))
        .collect();
    QueryBuf {
        sql: format!(
            "INSERT INTO {} AS \"t\" ({}) VALUES ({}) ON CONFLICT (\"id\") DO UPDATE SET {}, \"updated_at\" = NOW() \
             WHERE \"t\".{} RETURNING {}, (xmax = 0) AS \"inserted\"",
            qualified_table(schema, E::TABLE),
            cols.join(", "),
            placeholders.join(", "),
            sets.join(", "),
            ACTIVE,
            META_COLUMNS
        ),
        params,
    }
}

/// Move the id sequence past every stored id after a row was inserted at an explicit id.
/// $1 is the qualified table name.
pub fn sync_id_sequence<E: Entity>(schema: &str) -> String {
    format!(
        "SELECT setval(cur.seq, GREATEST(cur.max_id, COALESCE(pg_sequence_last_value(cur.seq), 0), 1)) \
         FROM (SELECT pg_get_serial_sequence($1, 'id')::regclass AS seq, \
         (SELECT MAX(\"id\") FROM {}) AS max_id) AS cur",
        qualified_table(schema, E::TABLE)
    )
}

/// Mark the active row inactive; $1 is the id.
pub fn soft_delete<E: Entity>(schema: &str) -> String {
    format!(
        "UPDATE {} SET \"deleted_at\" = NOW() WHERE \"id\" = $1 AND {}",
        qualified_table(schema, E::TABLE),
        ACTIVE
    )
}
