//! Shared application state: one service handle per entity, each over an injected repository.

use crate::model::{Class, School, Student};
use crate::service::CrudService;
use crate::store::{PgStore, Repository};
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub schools: CrudService<School>,
    pub classes: CrudService<Class>,
    pub students: CrudService<Student>,
}

impl AppState {
    /// All three entities served from the same pool.
    pub fn new(store: PgStore) -> Self {
        AppState::from_repositories(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store),
        )
    }

    pub fn from_repositories(
        schools: Arc<dyn Repository<School>>,
        classes: Arc<dyn Repository<Class>>,
        students: Arc<dyn Repository<Student>>,
    ) -> Self {
        AppState {
            schools: CrudService::new(schools),
            classes: CrudService::new(classes),
            students: CrudService::new(students),
        }
    }
}

impl FromRef<AppState> for CrudService<School> {
    fn from_ref(state: &AppState) -> Self {
        state.schools.clone()
    }
}

impl FromRef<AppState> for CrudService<Class> {
    fn from_ref(state: &AppState) -> Self {
        state.classes.clone()
    }
}

impl FromRef<AppState> for CrudService<Student> {
    fn from_ref(state: &AppState) -> Self {
        state.students.clone()
    }
}
