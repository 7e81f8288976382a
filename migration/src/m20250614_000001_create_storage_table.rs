use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Storage::Table)
                    .if_not_exists()
                    .col(pk_auto(Storage::Id))
                    .col(string(Storage::Url))
                    .col(string(Storage::Filename))
                    .col(string_null(Storage::OriginalName))
                    .col(string_null(Storage::Mimetype))
                    .col(big_integer_null(Storage::Size))
                    .col(timestamp_with_time_zone(Storage::UploadedAt))
                    .col(boolean(Storage::Deleted).default(false))
                    .col(timestamp_with_time_zone_null(Storage::DeletedAt))
                    .col(timestamp_with_time_zone(Storage::CreatedAt))
                    .col(timestamp_with_time_zone(Storage::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Storage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Storage {
    Table,
    Id,
    Url,
    Filename,
    OriginalName,
    Mimetype,
    Size,
    UploadedAt,
    Deleted,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}
