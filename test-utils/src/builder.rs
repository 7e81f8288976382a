use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` (or `with_all_tables()` for the full
/// schema), then call `build()` to get a `TestContext` whose in-memory SQLite
/// database has those tables created.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(Person)
///     .with_table(Storage)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// The CREATE TABLE statement is generated from the entity model using
    /// SQLite syntax, so unique constraints behave as in production.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every entity table. Convenient for router-level tests that touch
    /// several collections.
    pub fn with_all_tables(self) -> Self {
        self.with_table(Storage)
            .with_table(Person)
            .with_table(Post)
            .with_table(Item)
            .with_table(Assignature)
            .with_table(Institution)
            .with_table(Course)
            .with_table(Tag)
    }

    /// Builds and initializes the test context with the configured tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
