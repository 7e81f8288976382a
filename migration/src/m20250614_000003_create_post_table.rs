use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Post::Table)
                    .if_not_exists()
                    .col(pk_auto(Post::Id))
                    .col(string(Post::Title))
                    .col(string(Post::Content))
                    .col(integer(Post::AuthorId))
                    .col(json(Post::Tags))
                    .col(json(Post::MediaIds))
                    .col(big_integer(Post::Likes).default(0))
                    .col(big_integer(Post::Dislikes).default(0))
                    .col(json(Post::Comments))
                    .col(boolean(Post::Deleted).default(false))
                    .col(timestamp_with_time_zone_null(Post::DeletedAt))
                    .col(timestamp_with_time_zone(Post::CreatedAt))
                    .col(timestamp_with_time_zone(Post::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Post::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Post {
    Table,
    Id,
    Title,
    Content,
    AuthorId,
    Tags,
    MediaIds,
    Likes,
    Dislikes,
    Comments,
    Deleted,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}
