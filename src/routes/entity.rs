//! Entity CRUD routes, one router per entity type, nested under its path prefix by `api_routes`.

use crate::handlers::entity::{create, delete as delete_handler, list, read, update};
use crate::model::Entity;
use crate::service::CrudService;
use crate::state::AppState;
use axum::{extract::FromRef, routing::get, Router};

pub fn entity_routes<E>() -> Router<AppState>
where
    E: Entity,
    CrudService<E>: FromRef<AppState>,
{
    Router::new()
        .route("/", get(list::<E>).post(create::<E>))
        .route(
            "/:id",
            get(read::<E>).put(update::<E>).delete(delete_handler::<E>),
        )
}
