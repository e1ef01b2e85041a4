//! Student registry: CRUD over schools, classes and students, served over HTTP and stored in PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use migration::ensure_tables;
pub use model::{Address, Class, Entity, EntityId, RecordMeta, School, Student};
pub use routes::{api_routes, common_routes, common_routes_with_ready, entity_routes};
pub use service::CrudService;
pub use state::AppState;
pub use store::{ensure_database_exists, PgStore, Repository};
