//! Extract the numeric entity id from the `:id` path segment.

use crate::error::AppError;
use crate::model::{Entity, EntityId};
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::marker::PhantomData;

/// Path identifier of an `E`. Must parse as an unsigned integer within the store's key range.
#[derive(Debug)]
pub struct EntityPath<E>(pub EntityId, PhantomData<E>);

impl<E> EntityPath<E> {
    pub fn id(&self) -> EntityId {
        self.0
    }
}

fn parse_id<E: Entity>(raw: &str) -> Result<EntityId, AppError> {
    raw.parse::<u64>()
        .ok()
        .and_then(|n| EntityId::try_from(n).ok())
        .ok_or_else(|| AppError::BadRequest(format!("Invalid {} ID", E::LABEL.to_lowercase())))
}

#[async_trait]
impl<E, S> FromRequestParts<S> for EntityPath<E>
where
    E: Entity,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest(format!("Invalid {} ID", E::LABEL.to_lowercase())))?;
        Ok(EntityPath(parse_id::<E>(&raw)?, PhantomData))
    }
}
