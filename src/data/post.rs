//! Post data repository.
//!
//! Posts participate in the soft-delete convention and carry the like/dislike
//! counters. Counter updates are single atomic `UPDATE … SET x = x + 1`
//! statements, so concurrent calls can never lose an increment.

use chrono::Utc;
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::data::page::PageParams;
use crate::model::post::{CreatePostDto, PostListParams, UpdatePostDto};
use crate::model::{from_json, json_value};

pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(&self, param: &CreatePostDto) -> Result<entity::post::Model, DbErr> {
        let now = Utc::now();
        entity::post::ActiveModel {
            title: ActiveValue::Set(param.title.clone()),
            content: ActiveValue::Set(param.content.clone()),
            author_id: ActiveValue::Set(param.author_id),
            tags: ActiveValue::Set(json_value(&param.tags.clone().unwrap_or_default())),
            media_ids: ActiveValue::Set(json_value(&param.media_ids.clone().unwrap_or_default())),
            likes: ActiveValue::Set(0),
            dislikes: ActiveValue::Set(0),
            comments: ActiveValue::Set(json_value::<Vec<i64>>(&Vec::new())),
            deleted: ActiveValue::Set(false),
            deleted_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
        include_deleted: bool,
    ) -> Result<Option<entity::post::Model>, DbErr> {
        let mut query = entity::prelude::Post::find().filter(entity::post::Column::Id.eq(id));
        if !include_deleted {
            query = query.filter(entity::post::Column::Deleted.eq(false));
        }
        query.one(self.db).await
    }

    /// Batch lookup of non-deleted posts, used for feedback-reference
    /// resolution on items and assignatures.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::post::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        entity::prelude::Post::find()
            .filter(entity::post::Column::Id.is_in(ids.to_vec()))
            .filter(entity::post::Column::Deleted.eq(false))
            .all(self.db)
            .await
    }

    /// Gets posts with filtering and pagination, newest first.
    pub async fn get_all(
        &self,
        params: &PostListParams,
        page: PageParams,
    ) -> Result<(Vec<entity::post::Model>, u64), DbErr> {
        let mut cond = Condition::all();

        if !params.include_deleted {
            cond = cond.add(entity::post::Column::Deleted.eq(false));
        }
        if let Some(author_id) = params.author_id {
            cond = cond.add(entity::post::Column::AuthorId.eq(author_id));
        }
        if let Some(tag) = &params.tag {
            // Membership test against the JSON-encoded tag array.
            cond = cond.add(entity::post::Column::Tags.contains(format!("\"{}\"", tag)));
        }
        if let Some(search) = &params.search {
            cond = cond.add(
                Condition::any()
                    .add(entity::post::Column::Title.contains(search.as_str()))
                    .add(entity::post::Column::Content.contains(search.as_str()))
                    .add(entity::post::Column::Tags.contains(search.as_str())),
            );
        }

        let paginator = entity::prelude::Post::find()
            .filter(cond)
            .order_by_desc(entity::post::Column::CreatedAt)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.zero_indexed()).await?;

        Ok((entities, total))
    }

    pub async fn update(
        &self,
        id: i32,
        changes: &UpdatePostDto,
    ) -> Result<Option<entity::post::Model>, DbErr> {
        let Some(existing) = self.find_by_id(id, false).await? else {
            return Ok(None);
        };

        let mut active: entity::post::ActiveModel = existing.into();
        if let Some(title) = &changes.title {
            active.title = ActiveValue::Set(title.clone());
        }
        if let Some(content) = &changes.content {
            active.content = ActiveValue::Set(content.clone());
        }
        if let Some(tags) = &changes.tags {
            active.tags = ActiveValue::Set(json_value(tags));
        }
        if let Some(media_ids) = &changes.media_ids {
            active.media_ids = ActiveValue::Set(json_value(media_ids));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Marks a post deleted. Idempotent: an already-deleted post is returned
    /// untouched.
    pub async fn soft_delete(&self, id: i32) -> Result<Option<entity::post::Model>, DbErr> {
        let Some(existing) = self.find_by_id(id, true).await? else {
            return Ok(None);
        };
        if existing.deleted {
            return Ok(Some(existing));
        }

        let now = Utc::now();
        let mut active: entity::post::ActiveModel = existing.into();
        active.deleted = ActiveValue::Set(true);
        active.deleted_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);

        Ok(Some(active.update(self.db).await?))
    }

    /// Clears the soft-delete flag and timestamp. The caller is responsible
    /// for checking that the post actually is deleted.
    pub async fn clear_deleted(
        &self,
        model: entity::post::Model,
    ) -> Result<entity::post::Model, DbErr> {
        let mut active: entity::post::ActiveModel = model.into();
        active.deleted = ActiveValue::Set(false);
        active.deleted_at = ActiveValue::Set(None);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await
    }

    /// Atomically increments the like counter of a non-deleted post.
    ///
    /// # Returns
    /// - `Ok(Some(likes))` - The new counter value
    /// - `Ok(None)` - No matching (non-deleted) post
    pub async fn increment_likes(&self, id: i32) -> Result<Option<i64>, DbErr> {
        let result = entity::prelude::Post::update_many()
            .filter(entity::post::Column::Id.eq(id))
            .filter(entity::post::Column::Deleted.eq(false))
            .col_expr(
                entity::post::Column::Likes,
                Expr::col(entity::post::Column::Likes).add(1),
            )
            .exec(self.db)
            .await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }
        Ok(self.find_by_id(id, false).await?.map(|p| p.likes))
    }

    /// Atomically increments the dislike counter of a non-deleted post.
    pub async fn increment_dislikes(&self, id: i32) -> Result<Option<i64>, DbErr> {
        let result = entity::prelude::Post::update_many()
            .filter(entity::post::Column::Id.eq(id))
            .filter(entity::post::Column::Deleted.eq(false))
            .col_expr(
                entity::post::Column::Dislikes,
                Expr::col(entity::post::Column::Dislikes).add(1),
            )
            .exec(self.db)
            .await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }
        Ok(self.find_by_id(id, false).await?.map(|p| p.dislikes))
    }

    /// Appends a comment id to the post's comment list.
    pub async fn push_comment(
        &self,
        id: i32,
        comment_id: i64,
    ) -> Result<Option<entity::post::Model>, DbErr> {
        let Some(existing) = self.find_by_id(id, false).await? else {
            return Ok(None);
        };

        let mut comments: Vec<i64> = from_json(existing.comments.clone());
        comments.push(comment_id);

        let mut active: entity::post::ActiveModel = existing.into();
        active.comments = ActiveValue::Set(json_value(&comments));
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }
}
