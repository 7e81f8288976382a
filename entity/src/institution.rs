use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "institution")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub legal_name: String,
    pub trade_name: String,
    pub abbr: String,
    #[sea_orm(unique)]
    pub email: String,
    /// JSON array of domain-category names from the closed set.
    pub domains: Json,
    /// JSON arrays of address / phone strings.
    pub addresses: Json,
    pub phones: Json,
    #[sea_orm(unique)]
    pub tax_id: String,
    /// JSON array of storage record ids.
    pub media_ids: Json,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
