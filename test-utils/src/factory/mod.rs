//! Factories for inserting test records with sensible defaults.
//!
//! Each factory fills an entity's required fields with unique values (via the
//! shared counter in `helpers`) and exposes builder-style setters for the
//! fields tests usually customize.

pub mod assignature;
pub mod course;
pub mod helpers;
pub mod institution;
pub mod item;
pub mod person;
pub mod post;
pub mod storage;
pub mod tag;
