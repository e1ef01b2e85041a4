//! Response helpers: entities are returned bare, deletions get a confirmation body.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

/// `{"message": "School deleted successfully"}` for the given entity label.
pub fn deleted(label: &str) -> (StatusCode, Json<DeleteConfirmation>) {
    ok(DeleteConfirmation {
        message: format!("{} deleted successfully", label),
    })
}
