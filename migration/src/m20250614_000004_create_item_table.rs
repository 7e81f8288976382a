use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(pk_auto(Item::Id))
                    .col(string(Item::TagName))
                    .col(string(Item::ItemType))
                    .col(string(Item::Description))
                    .col(json(Item::MediaIds))
                    .col(string_null(Item::Repo))
                    .col(string_null(Item::Deploy))
                    .col(big_integer(Item::Likes).default(0))
                    .col(big_integer(Item::Dislikes).default(0))
                    .col(json(Item::Feedbacks))
                    .col(json(Item::Tags))
                    .col(timestamp_with_time_zone(Item::CreatedAt))
                    .col(timestamp_with_time_zone(Item::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Item::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Item {
    Table,
    Id,
    TagName,
    ItemType,
    Description,
    MediaIds,
    Repo,
    Deploy,
    Likes,
    Dislikes,
    Feedbacks,
    Tags,
    CreatedAt,
    UpdatedAt,
}
