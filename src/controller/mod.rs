//! HTTP request handlers.
//!
//! Controllers extract and validate input, call the matching service, and
//! wrap the result in the JSON response envelope. Errors bubble up as
//! `AppError` and are rendered by its `IntoResponse` impl.

pub mod api;
pub mod assignature;
pub mod course;
pub mod institution;
pub mod item;
pub mod person;
pub mod post;
pub mod storage;
pub mod tag;
pub mod upload;
