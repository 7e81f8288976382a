//! Tag data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::data::page::PageParams;
use crate::model::tag::{CreateTagDto, TagListParams, UpdateTagDto};

pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(&self, param: &CreateTagDto) -> Result<entity::tag::Model, DbErr> {
        let now = Utc::now();
        entity::tag::ActiveModel {
            tag_name: ActiveValue::Set(param.tag_name.clone()),
            description: ActiveValue::Set(param.description.clone()),
            color: ActiveValue::Set(param.color.clone()),
            media_id: ActiveValue::Set(param.media_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_name(&self, tag_name: &str) -> Result<Option<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .filter(entity::tag::Column::TagName.eq(tag_name))
            .one(self.db)
            .await
    }

    /// Batch lookup used when resolving tag references on other entities.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::tag::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        entity::prelude::Tag::find()
            .filter(entity::tag::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Gets tags with filtering and pagination, newest first.
    pub async fn get_all(
        &self,
        params: &TagListParams,
        page: PageParams,
    ) -> Result<(Vec<entity::tag::Model>, u64), DbErr> {
        let mut cond = Condition::all();

        if let Some(color) = &params.color {
            cond = cond.add(entity::tag::Column::Color.eq(color));
        }
        if let Some(search) = &params.search {
            cond = cond.add(
                Condition::any()
                    .add(entity::tag::Column::TagName.contains(search.as_str()))
                    .add(entity::tag::Column::Description.contains(search.as_str())),
            );
        }

        let paginator = entity::prelude::Tag::find()
            .filter(cond)
            .order_by_desc(entity::tag::Column::CreatedAt)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.zero_indexed()).await?;

        Ok((entities, total))
    }

    /// Most recently created tags, up to `limit`.
    pub async fn get_popular(&self, limit: u64) -> Result<Vec<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .order_by_desc(entity::tag::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// All tags of an exact color, newest first.
    pub async fn get_by_color(&self, color: &str) -> Result<Vec<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .filter(entity::tag::Column::Color.eq(color))
            .order_by_desc(entity::tag::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        changes: &UpdateTagDto,
    ) -> Result<Option<entity::tag::Model>, DbErr> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::tag::ActiveModel = existing.into();
        if let Some(tag_name) = &changes.tag_name {
            active.tag_name = ActiveValue::Set(tag_name.clone());
        }
        if let Some(description) = &changes.description {
            active.description = ActiveValue::Set(description.clone());
        }
        if let Some(color) = &changes.color {
            active.color = ActiveValue::Set(color.clone());
        }
        if let Some(media_id) = changes.media_id {
            active.media_id = ActiveValue::Set(Some(media_id));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Tag::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
