//! Router assembly: entity routes under `/schools`, `/classes`, `/students` plus operational routes.

mod common;
mod entity;

pub use common::{common_routes, common_routes_with_ready};
pub use entity::entity_routes;

use crate::model::{Class, School, Student};
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Default cap on request bodies (1 MiB).
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// The fifteen entity endpoints, traced and body-limited.
pub fn api_routes(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .nest("/schools", entity_routes::<School>())
        .nest("/classes", entity_routes::<Class>())
        .nest("/students", entity_routes::<Student>())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(body_limit)),
        )
}
