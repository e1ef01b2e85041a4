//! Create the schema and entity tables if they do not exist yet. There is no other migration step.

use crate::error::AppError;
use crate::model::{Class, Entity, School, Student};
use crate::sql::qualified_table;
use sqlx::PgPool;

/// Id, timestamps and the soft-delete marker followed by the entity's own column definitions.
fn table_ddl<E: Entity>(schema: &str) -> String {
    let mut cols = vec![
        "\"id\" BIGSERIAL PRIMARY KEY".to_string(),
        "\"created_at\" TIMESTAMPTZ NOT NULL DEFAULT NOW()".to_string(),
        "\"updated_at\" TIMESTAMPTZ NOT NULL DEFAULT NOW()".to_string(),
        "\"deleted_at\" TIMESTAMPTZ".to_string(),
    ];
    cols.extend(E::COLUMN_DEFS.iter().map(|c| c.to_string()));
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        qualified_table(schema, E::TABLE),
        cols.join(", ")
    )
}

fn deleted_at_index_ddl<E: Entity>(schema: &str) -> String {
    format!(
        "CREATE INDEX IF NOT EXISTS \"idx_{}_deleted_at\" ON {} (\"deleted_at\")",
        E::TABLE,
        qualified_table(schema, E::TABLE)
    )
}

async fn ensure_table<E: Entity>(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    sqlx::query(&table_ddl::<E>(schema)).execute(pool).await?;
    sqlx::query(&deleted_at_index_ddl::<E>(schema))
        .execute(pool)
        .await?;
    tracing::debug!(table = E::TABLE, "table ready");
    Ok(())
}

fn create_schema_ddl(schema: &str) -> String {
    format!(
        "CREATE SCHEMA IF NOT EXISTS \"{}\"",
        schema.replace('"', "\"\"")
    )
}

/// Create `schema` if not exists, then the schools, classes and students tables.
pub async fn ensure_tables(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_namespace WHERE nspname = $1)")
            .bind(schema)
            .fetch_one(pool)
            .await?;
    if !exists.0 {
        tracing::info!(schema, "creating schema");
        sqlx::query(&create_schema_ddl(schema)).execute(pool).await?;
    }

    ensure_table::<School>(pool, schema).await?;
    ensure_table::<Class>(pool, schema).await?;
    ensure_table::<Student>(pool, schema).await?;
    Ok(())
}
