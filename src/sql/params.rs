//! Column values collected from entities and bound to PostgreSQL queries.

use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::QueryAs;

/// A value that can be bound to a PostgreSQL query, one per writable column.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
    BigInt(i64),
    Text(String),
}

impl From<i64> for SqlValue {
    fn from(n: i64) -> Self {
        SqlValue::BigInt(n)
    }
}

impl From<&String> for SqlValue {
    fn from(s: &String) -> Self {
        SqlValue::Text(s.clone())
    }
}

/// Bind every parameter in order ($1, $2, ...).
pub fn bind_params<'q, O>(
    mut query: QueryAs<'q, Postgres, O, PgArguments>,
    params: &'q [SqlValue],
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for p in params {
        query = match p {
            SqlValue::BigInt(n) => query.bind(*n),
            SqlValue::Text(s) => query.bind(s.as_str()),
        };
    }
    query
}
