//! Domain models, request/response DTOs and list-filter parameter types.
//!
//! Conversion between SeaORM entity models and the types exposed on the wire
//! happens here. Document-style list fields are stored as JSON columns; the
//! `json_value` / `from_json` helpers below do the (infallible in practice)
//! conversion at this boundary.

pub mod api;
pub mod assignature;
pub mod course;
pub mod institution;
pub mod item;
pub mod person;
pub mod post;
pub mod storage;
pub mod tag;

use sea_orm::entity::prelude::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serializes a value into a JSON column value.
pub(crate) fn json_value<T: Serialize>(value: &T) -> Json {
    serde_json::to_value(value).unwrap_or_default()
}

/// Decodes a JSON column value, falling back to the type's default when the
/// stored document does not match (e.g. legacy rows).
pub(crate) fn from_json<T: DeserializeOwned + Default>(value: Json) -> T {
    serde_json::from_value(value).unwrap_or_default()
}
