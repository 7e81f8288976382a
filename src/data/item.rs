//! Item data repository.

use chrono::Utc;
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::data::page::PageParams;
use crate::model::item::{CreateItemDto, ItemListParams, UpdateItemDto, DEFAULT_ITEM_TYPE};
use crate::model::json_value;

pub struct ItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(&self, param: &CreateItemDto) -> Result<entity::item::Model, DbErr> {
        let now = Utc::now();
        entity::item::ActiveModel {
            tag_name: ActiveValue::Set(param.tag_name.clone()),
            item_type: ActiveValue::Set(
                param
                    .item_type
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ITEM_TYPE.to_string()),
            ),
            description: ActiveValue::Set(param.description.clone()),
            media_ids: ActiveValue::Set(json_value(&param.media_ids.clone().unwrap_or_default())),
            repo: ActiveValue::Set(param.repo.clone()),
            deploy: ActiveValue::Set(param.deploy.clone()),
            likes: ActiveValue::Set(0),
            dislikes: ActiveValue::Set(0),
            feedbacks: ActiveValue::Set(json_value(&param.feedbacks.clone().unwrap_or_default())),
            tags: ActiveValue::Set(json_value(&param.tags.clone().unwrap_or_default())),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::item::Model>, DbErr> {
        entity::prelude::Item::find_by_id(id).one(self.db).await
    }

    /// Gets items with filtering and pagination, newest first.
    pub async fn get_all(
        &self,
        params: &ItemListParams,
        page: PageParams,
    ) -> Result<(Vec<entity::item::Model>, u64), DbErr> {
        let mut cond = Condition::all();

        if let Some(item_type) = &params.item_type {
            cond = cond.add(entity::item::Column::ItemType.eq(item_type));
        }
        if let Some(search) = &params.search {
            cond = cond.add(
                Condition::any()
                    .add(entity::item::Column::TagName.contains(search.as_str()))
                    .add(entity::item::Column::Description.contains(search.as_str())),
            );
        }

        let paginator = entity::prelude::Item::find()
            .filter(cond)
            .order_by_desc(entity::item::Column::CreatedAt)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.zero_indexed()).await?;

        Ok((entities, total))
    }

    pub async fn update(
        &self,
        id: i32,
        changes: &UpdateItemDto,
    ) -> Result<Option<entity::item::Model>, DbErr> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::item::ActiveModel = existing.into();
        if let Some(tag_name) = &changes.tag_name {
            active.tag_name = ActiveValue::Set(tag_name.clone());
        }
        if let Some(item_type) = &changes.item_type {
            active.item_type = ActiveValue::Set(item_type.clone());
        }
        if let Some(description) = &changes.description {
            active.description = ActiveValue::Set(description.clone());
        }
        if let Some(media_ids) = &changes.media_ids {
            active.media_ids = ActiveValue::Set(json_value(media_ids));
        }
        if let Some(repo) = &changes.repo {
            active.repo = ActiveValue::Set(Some(repo.clone()));
        }
        if let Some(deploy) = &changes.deploy {
            active.deploy = ActiveValue::Set(Some(deploy.clone()));
        }
        if let Some(feedbacks) = &changes.feedbacks {
            active.feedbacks = ActiveValue::Set(json_value(feedbacks));
        }
        if let Some(tags) = &changes.tags {
            active.tags = ActiveValue::Set(json_value(tags));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Item::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Atomically increments the like counter.
    pub async fn increment_likes(&self, id: i32) -> Result<Option<i64>, DbErr> {
        let result = entity::prelude::Item::update_many()
            .filter(entity::item::Column::Id.eq(id))
            .col_expr(
                entity::item::Column::Likes,
                Expr::col(entity::item::Column::Likes).add(1),
            )
            .exec(self.db)
            .await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }
        Ok(self.find_by_id(id).await?.map(|i| i.likes))
    }

    /// Atomically increments the dislike counter.
    pub async fn increment_dislikes(&self, id: i32) -> Result<Option<i64>, DbErr> {
        let result = entity::prelude::Item::update_many()
            .filter(entity::item::Column::Id.eq(id))
            .col_expr(
                entity::item::Column::Dislikes,
                Expr::col(entity::item::Column::Dislikes).add(1),
            )
            .exec(self.db)
            .await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }
        Ok(self.find_by_id(id).await?.map(|i| i.dislikes))
    }
}
