use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tag_name: String,
    /// One of the closed content-type set, stored as its wire name.
    pub item_type: String,
    pub description: String,
    /// JSON array of storage record ids.
    pub media_ids: Json,
    pub repo: Option<String>,
    pub deploy: Option<String>,
    pub likes: i64,
    pub dislikes: i64,
    /// JSON array of post ids used as feedback references.
    pub feedbacks: Json,
    /// JSON array of tag record ids.
    pub tags: Json,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
