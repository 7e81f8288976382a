//! Assignature data repository.

use chrono::Utc;
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::data::page::PageParams;
use crate::model::assignature::{
    AssignatureListParams, CreateAssignatureDto, UpdateAssignatureDto, DEFAULT_ASSIGNATURE_TYPE,
};
use crate::model::json_value;

pub struct AssignatureRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssignatureRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        param: &CreateAssignatureDto,
    ) -> Result<entity::assignature::Model, DbErr> {
        let now = Utc::now();
        entity::assignature::ActiveModel {
            tag_name: ActiveValue::Set(param.tag_name.clone()),
            assignature_type: ActiveValue::Set(
                param
                    .assignature_type
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ASSIGNATURE_TYPE.to_string()),
            ),
            description: ActiveValue::Set(param.description.clone()),
            media_ids: ActiveValue::Set(json_value(&param.media_ids.clone().unwrap_or_default())),
            module_ids: ActiveValue::Set(json_value(&param.module_ids.clone().unwrap_or_default())),
            task_ids: ActiveValue::Set(json_value(&param.task_ids.clone().unwrap_or_default())),
            classroom_ids: ActiveValue::Set(json_value(
                &param.classroom_ids.clone().unwrap_or_default(),
            )),
            institution_ids: ActiveValue::Set(json_value(
                &param.institution_ids.clone().unwrap_or_default(),
            )),
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

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::assignature::Model>, DbErr> {
        entity::prelude::Assignature::find_by_id(id).one(self.db).await
    }

    /// Gets assignatures with filtering and pagination, newest first.
    pub async fn get_all(
        &self,
        params: &AssignatureListParams,
        page: PageParams,
    ) -> Result<(Vec<entity::assignature::Model>, u64), DbErr> {
        let mut cond = Condition::all();

        if let Some(assignature_type) = &params.assignature_type {
            cond = cond.add(entity::assignature::Column::AssignatureType.eq(assignature_type));
        }
        if let Some(search) = &params.search {
            cond = cond.add(
                Condition::any()
                    .add(entity::assignature::Column::TagName.contains(search.as_str()))
                    .add(entity::assignature::Column::Description.contains(search.as_str())),
            );
        }

        let paginator = entity::prelude::Assignature::find()
            .filter(cond)
            .order_by_desc(entity::assignature::Column::CreatedAt)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.zero_indexed()).await?;

        Ok((entities, total))
    }

    pub async fn update(
        &self,
        id: i32,
        changes: &UpdateAssignatureDto,
    ) -> Result<Option<entity::assignature::Model>, DbErr> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::assignature::ActiveModel = existing.into();
        if let Some(tag_name) = &changes.tag_name {
            active.tag_name = ActiveValue::Set(tag_name.clone());
        }
        if let Some(assignature_type) = &changes.assignature_type {
            active.assignature_type = ActiveValue::Set(assignature_type.clone());
        }
        if let Some(description) = &changes.description {
            active.description = ActiveValue::Set(description.clone());
        }
        if let Some(media_ids) = &changes.media_ids {
            active.media_ids = ActiveValue::Set(json_value(media_ids));
        }
        if let Some(module_ids) = &changes.module_ids {
            active.module_ids = ActiveValue::Set(json_value(module_ids));
        }
        if let Some(task_ids) = &changes.task_ids {
            active.task_ids = ActiveValue::Set(json_value(task_ids));
        }
        if let Some(classroom_ids) = &changes.classroom_ids {
            active.classroom_ids = ActiveValue::Set(json_value(classroom_ids));
        }
        if let Some(institution_ids) = &changes.institution_ids {
            active.institution_ids = ActiveValue::Set(json_value(institution_ids));
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
        let result = entity::prelude::Assignature::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Atomically increments the like counter.
    pub async fn increment_likes(&self, id: i32) -> Result<Option<i64>, DbErr> {
        let result = entity::prelude::Assignature::update_many()
            .filter(entity::assignature::Column::Id.eq(id))
            .col_expr(
                entity::assignature::Column::Likes,
                Expr::col(entity::assignature::Column::Likes).add(1),
            )
            .exec(self.db)
            .await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }
        Ok(self.find_by_id(id).await?.map(|a| a.likes))
    }

    /// Atomically increments the dislike counter.
    pub async fn increment_dislikes(&self, id: i32) -> Result<Option<i64>, DbErr> {
        let result = entity::prelude::Assignature::update_many()
            .filter(entity::assignature::Column::Id.eq(id))
            .col_expr(
                entity::assignature::Column::Dislikes,
                Expr::col(entity::assignature::Column::Dislikes).add(1),
            )
            .exec(self.db)
            .await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }
        Ok(self.find_by_id(id).await?.map(|a| a.dislikes))
    }
}
