//! Request extractors that reject with `AppError::BadRequest`.

mod id;
mod json;
pub use id::EntityPath;
pub use json::JsonBody;
