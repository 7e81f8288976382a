use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Institution::Table)
                    .if_not_exists()
                    .col(pk_auto(Institution::Id))
                    .col(string_uniq(Institution::LegalName))
                    .col(string(Institution::TradeName))
                    .col(string(Institution::Abbr))
                    .col(string_uniq(Institution::Email))
                    .col(json(Institution::Domains))
                    .col(json(Institution::Addresses))
                    .col(json(Institution::Phones))
                    .col(string_uniq(Institution::TaxId))
                    .col(json(Institution::MediaIds))
                    .col(timestamp_with_time_zone(Institution::CreatedAt))
                    .col(timestamp_with_time_zone(Institution::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Institution::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Institution {
    Table,
    Id,
    LegalName,
    TradeName,
    Abbr,
    Email,
    Domains,
    Addresses,
    Phones,
    TaxId,
    MediaIds,
    CreatedAt,
    UpdatedAt,
}
