//! PostgreSQL-backed repository and database bootstrap.

use super::Repository;
use crate::error::{AppError, ConfigError};
use crate::model::{Entity, EntityId, RecordMeta};
use crate::sql::{
    bind_params, insert, qualified_table, select_by_id, select_list, soft_delete,
    sync_id_sequence, upsert,
};
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::{FromRow, PgPool};
use std::str::FromStr;

/// Row returned by an upsert: the generated columns plus whether the row was new.
#[derive(FromRow)]
struct Upserted {
    #[sqlx(flatten)]
    meta: RecordMeta,
    inserted: bool,
}

/// Repository over a connection pool. Entity tables live in `schema`.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
    schema: String,
}

impl PgStore {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        PgStore {
            pool,
            schema: schema.into(),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for PgStore {
    async fn list_all(&self) -> Result<Vec<E>, AppError> {
        let sql = select_list::<E>(&self.schema);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, E>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: EntityId) -> Result<E, AppError> {
        let sql = select_by_id::<E>(&self.schema);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} not found", E::LABEL)))
    }

    async fn create(&self, entity: &mut E) -> Result<(), AppError> {
        let q = insert(&self.schema, &*entity);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let meta = bind_params(sqlx::query_as::<_, RecordMeta>(&q.sql), &q.params)
            .fetch_one(&self.pool)
            .await?;
        *entity.meta_mut() = meta;
        Ok(())
    }

    async fn update(&self, entity: &mut E) -> Result<(), AppError> {
        let id = entity.id();
        let q = upsert(&self.schema, &*entity);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_params(sqlx::query_as::<_, Upserted>(&q.sql), &q.params)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::Store(format!("{} {} is deleted", E::LABEL, id)))?;
        if row.inserted {
            let sql = sync_id_sequence::<E>(&self.schema);
            tracing::debug!(sql = %sql, "query");
            sqlx::query(&sql)
                .bind(qualified_table(&self.schema, E::TABLE))
                .execute(&self.pool)
                .await?;
            tracing::info!(table = E::TABLE, id, "update inserted a new row");
        }
        *entity.meta_mut() = row.meta;
        Ok(())
    }

    async fn delete(&self, id: EntityId) -> Result<(), AppError> {
        let sql = soft_delete::<E>(&self.schema);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            tracing::debug!(table = E::TABLE, id, "delete matched no active row");
        }
        Ok(())
    }
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| ConfigError::DatabaseUrl(e.to_string()))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split a connection URL into (admin URL pointing at `postgres`, target database name).
fn parse_db_name_from_url(url: &str) -> Result<(String, String), ConfigError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url
        .get(scheme_end..)
        .and_then(|rest| rest.find('/'))
        .map(|i| scheme_end + i + 1)
        .ok_or_else(|| ConfigError::DatabaseUrl("no database path".into()))?;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let mut parts = path_and_query.splitn(2, '?');
    let db_name = parts.next().unwrap_or("").trim();
    let query = parts.next().map(|q| format!("?{}", q)).unwrap_or_default();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres{}", base, query), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
