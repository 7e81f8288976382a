//! Eduhub Test Utils
//!
//! Shared testing utilities for the eduhub backend. Provides a builder
//! pattern for creating test contexts with in-memory SQLite databases and
//! customizable table schemas, plus per-entity factories for inserting test
//! records with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Course;
//!
//! #[tokio::test]
//! async fn test_course_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_table(Course).build().await?;
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
