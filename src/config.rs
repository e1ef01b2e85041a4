//! Process settings read from the environment, with defaults for a local PostgreSQL.

use crate::error::ConfigError;
use crate::routes::DEFAULT_BODY_LIMIT;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://postgres@localhost:5432/stu";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_SCHEMA: &str = "public";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub database_url: String,
    pub max_connections: u32,
    /// Schema holding the entity tables. From `REGISTRY_SCHEMA`.
    pub schema: String,
    pub bind_addr: SocketAddr,
    pub body_limit: usize,
}

impl Settings {
    /// Read the process environment. Callers load `.env` first if they want one.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Ok(Settings {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                get("DATABASE_MAX_CONNECTIONS"),
                DEFAULT_MAX_CONNECTIONS,
            )?,
            schema: get("REGISTRY_SCHEMA").unwrap_or_else(|| DEFAULT_SCHEMA.into()),
            bind_addr: parse_or("BIND_ADDR", get("BIND_ADDR"), default_bind_addr())?,
            body_limit: parse_or(
                "REQUEST_BODY_LIMIT",
                get("REQUEST_BODY_LIMIT"),
                DEFAULT_BODY_LIMIT,
            )?,
        })
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn parse_or<T: FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { key, value }),
    }
}
