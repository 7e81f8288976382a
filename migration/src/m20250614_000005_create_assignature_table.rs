use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assignature::Table)
                    .if_not_exists()
                    .col(pk_auto(Assignature::Id))
                    .col(string(Assignature::TagName))
                    .col(string(Assignature::AssignatureType))
                    .col(string(Assignature::Description))
                    .col(json(Assignature::MediaIds))
                    .col(json(Assignature::ModuleIds))
                    .col(json(Assignature::TaskIds))
                    .col(json(Assignature::ClassroomIds))
                    .col(json(Assignature::InstitutionIds))
                    .col(big_integer(Assignature::Likes).default(0))
                    .col(big_integer(Assignature::Dislikes).default(0))
                    .col(json(Assignature::Feedbacks))
                    .col(json(Assignature::Tags))
                    .col(timestamp_with_time_zone(Assignature::CreatedAt))
                    .col(timestamp_with_time_zone(Assignature::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assignature::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Assignature {
    Table,
    Id,
    TagName,
    AssignatureType,
    Description,
    MediaIds,
    ModuleIds,
    TaskIds,
    ClassroomIds,
    InstitutionIds,
    Likes,
    Dislikes,
    Feedbacks,
    Tags,
    CreatedAt,
    UpdatedAt,
}
