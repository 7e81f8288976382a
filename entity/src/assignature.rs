use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignature")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tag_name: String,
    /// One of the closed education-level set, stored as its wire name.
    pub assignature_type: String,
    pub description: String,
    /// JSON array of storage record ids.
    pub media_ids: Json,
    /// JSON arrays of opaque module/task/classroom ids.
    pub module_ids: Json,
    pub task_ids: Json,
    pub classroom_ids: Json,
    /// JSON array of institution record ids.
    pub institution_ids: Json,
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
