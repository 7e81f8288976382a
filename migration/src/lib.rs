pub use sea_orm_migration::prelude::*;

mod m20250614_000001_create_storage_table;
mod m20250614_000002_create_person_table;
mod m20250614_000003_create_post_table;
mod m20250614_000004_create_item_table;
mod m20250614_000005_create_assignature_table;
mod m20250614_000006_create_institution_table;
mod m20250614_000007_create_course_table;
mod m20250614_000008_create_tag_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250614_000001_create_storage_table::Migration),
            Box::new(m20250614_000002_create_person_table::Migration),
            Box::new(m20250614_000003_create_post_table::Migration),
            Box::new(m20250614_000004_create_item_table::Migration),
            Box::new(m20250614_000005_create_assignature_table::Migration),
            Box::new(m20250614_000006_create_institution_table::Migration),
            Box::new(m20250614_000007_create_course_table::Migration),
            Box::new(m20250614_000008_create_tag_table::Migration),
        ]
    }
}
