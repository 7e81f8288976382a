use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(pk_auto(Person::Id))
                    .col(string_uniq(Person::Username))
                    .col(string(Person::FirstName))
                    .col(string(Person::LastName))
                    .col(string_uniq(Person::Email))
                    .col(json(Person::Roles))
                    .col(string(Person::Hex))
                    .col(string(Person::PasswordHash))
                    .col(string(Person::Bio))
                    .col(json(Person::Social))
                    .col(integer_null(Person::AvatarId))
                    .col(integer_null(Person::CoverId))
                    .col(boolean(Person::Newsletter).default(false))
                    .col(boolean(Person::IsActive).default(true))
                    .col(timestamp_with_time_zone_null(Person::LastLogin))
                    .col(timestamp_with_time_zone(Person::CreatedAt))
                    .col(timestamp_with_time_zone(Person::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Person::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Person {
    Table,
    Id,
    Username,
    FirstName,
    LastName,
    Email,
    Roles,
    Hex,
    PasswordHash,
    Bio,
    Social,
    AvatarId,
    CoverId,
    Newsletter,
    IsActive,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}
