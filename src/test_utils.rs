//! In-memory repositories for handler tests.

use crate::error::AppError;
use crate::model::{Class, Entity, EntityId, School, Student};
use crate::state::AppState;
use crate::store::Repository;
use async_trait::async_trait;
use chrono::Utc;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Soft-delete aware store over a `Vec`. Ids start at 1. Counts every call.
pub struct MemoryRepository<E> {
    rows: Mutex<Vec<E>>,
    calls: AtomicUsize,
}

impl<E> Default for MemoryRepository<E> {
    fn default() -> Self {
        MemoryRepository {
            rows: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }
}

impl<E: Entity> MemoryRepository<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store operations performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Insert directly, bypassing the call counter.
    pub fn seed(&self, mut entity: E) -> E {
        self.insert(&mut entity);
        entity
    }

    fn insert(&self, entity: &mut E) {
        let mut rows = self.rows.lock().unwrap();
        let next_id = rows.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
        let now = Utc::now();
        let meta = entity.meta_mut();
        meta.id = next_id;
        meta.created_at = now;
        meta.updated_at = now;
        meta.deleted_at = None;
        rows.push(entity.clone());
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for MemoryRepository<E> {
    async fn list_all(&self) -> Result<Vec<E>, AppError> {
        self.touch();
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|r| r.meta().is_active()).cloned().collect())
    }

    async fn get_by_id(&self, id: EntityId) -> Result<E, AppError> {
        self.touch();
        let rows = self.rows.lock().unwrap();
        rows.iter()
            .find(|r| r.id() == id && r.meta().is_active())
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("{} not found", E::LABEL)))
    }

    async fn create(&self, entity: &mut E) -> Result<(), AppError> {
        self.touch();
        self.insert(entity);
        Ok(())
    }

    async fn update(&self, entity: &mut E) -> Result<(), AppError> {
        self.touch();
        let mut rows = self.rows.lock().unwrap();
        let id = entity.id();
        match rows.iter_mut().find(|r| r.id() == id) {
            Some(row) if !row.meta().is_active() => {
                Err(AppError::Store(format!("{} {} is deleted", E::LABEL, id)))
            }
            Some(row) => {
                let mut meta = row.meta().clone();
                meta.updated_at = Utc::now();
                *entity.meta_mut() = meta;
                *row = entity.clone();
                Ok(())
            }
            None => {
                let now = Utc::now();
                let meta = entity.meta_mut();
                meta.created_at = now;
                meta.updated_at = now;
                meta.deleted_at = None;
                rows.push(entity.clone());
                Ok(())
            }
        }
    }

    async fn delete(&self, id: EntityId) -> Result<(), AppError> {
        self.touch();
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|r| r.id() == id && r.meta().is_active()) {
            row.meta_mut().deleted_at = Some(Utc::now());
        }
        Ok(())
    }
}

/// Every operation fails the way an unreachable database would.
pub struct FailingRepository<E>(PhantomData<fn() -> E>);

impl<E> Default for FailingRepository<E> {
    fn default() -> Self {
        FailingRepository(PhantomData)
    }
}

impl<E> FailingRepository<E> {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for FailingRepository<E> {
    async fn list_all(&self) -> Result<Vec<E>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn get_by_id(&self, _id: EntityId) -> Result<E, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn create(&self, _entity: &mut E) -> Result<(), AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn update(&self, _entity: &mut E) -> Result<(), AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _id: EntityId) -> Result<(), AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }
}

/// Memory repositories for all three entities, kept so tests can inspect them.
pub struct MemoryStores {
    pub schools: Arc<MemoryRepository<School>>,
    pub classes: Arc<MemoryRepository<Class>>,
    pub students: Arc<MemoryRepository<Student>>,
}

impl Default for MemoryStores {
    fn default() -> Self {
        MemoryStores {
            schools: Arc::new(MemoryRepository::new()),
            classes: Arc::new(MemoryRepository::new()),
            students: Arc::new(MemoryRepository::new()),
        }
    }
}

impl MemoryStores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AppState {
        AppState::from_repositories(
            self.schools.clone(),
            self.classes.clone(),
            self.students.clone(),
        )
    }

    pub fn total_calls(&self) -> usize {
        self.schools.calls() + self.classes.calls() + self.students.calls()
    }
}

pub fn failing_state() -> AppState {
    AppState::from_repositories(
        Arc::new(FailingRepository::new()),
        Arc::new(FailingRepository::new()),
        Arc::new(FailingRepository::new()),
    )
}
