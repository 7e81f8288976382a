//! Storage (file metadata) data repository.
//!
//! Storage records participate in the soft-delete convention: `delete` flips
//! the flag instead of removing the row, and every read takes an explicit
//! `include_deleted` parameter instead of rewriting queries behind the
//! caller's back.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::data::page::PageParams;
use crate::model::storage::{CreateStorageDto, StorageListParams, UpdateStorageDto};

pub struct StorageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StorageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(&self, param: &CreateStorageDto) -> Result<entity::storage::Model, DbErr> {
        let now = Utc::now();
        entity::storage::ActiveModel {
            url: ActiveValue::Set(param.url.clone()),
            filename: ActiveValue::Set(param.filename.clone()),
            original_name: ActiveValue::Set(param.original_name.clone()),
            mimetype: ActiveValue::Set(param.mimetype.clone()),
            size: ActiveValue::Set(param.size),
            uploaded_at: ActiveValue::Set(now),
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
    ) -> Result<Option<entity::storage::Model>, DbErr> {
        let mut query =
            entity::prelude::Storage::find().filter(entity::storage::Column::Id.eq(id));
        if !include_deleted {
            query = query.filter(entity::storage::Column::Deleted.eq(false));
        }
        query.one(self.db).await
    }

    /// Batch lookup used when resolving media references on other entities.
    /// Deleted files are still resolvable as references.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::storage::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        entity::prelude::Storage::find()
            .filter(entity::storage::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Gets storage records with filtering and pagination, newest first.
    pub async fn get_all(
        &self,
        params: &StorageListParams,
        page: PageParams,
    ) -> Result<(Vec<entity::storage::Model>, u64), DbErr> {
        let mut cond = Condition::all();

        if !params.include_deleted {
            cond = cond.add(entity::storage::Column::Deleted.eq(false));
        }
        if let Some(file_type) = &params.file_type {
            cond = cond.add(entity::storage::Column::Filename.ends_with(format!(".{}", file_type)));
        }
        if let Some(search) = &params.search {
            cond = cond.add(
                Condition::any()
                    .add(entity::storage::Column::Filename.contains(search.as_str()))
                    .add(entity::storage::Column::Url.contains(search.as_str())),
            );
        }

        let paginator = entity::prelude::Storage::find()
            .filter(cond)
            .order_by_desc(entity::storage::Column::CreatedAt)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.zero_indexed()).await?;

        Ok((entities, total))
    }

    pub async fn update(
        &self,
        id: i32,
        changes: &UpdateStorageDto,
    ) -> Result<Option<entity::storage::Model>, DbErr> {
        let Some(existing) = self.find_by_id(id, false).await? else {
            return Ok(None);
        };

        let mut active: entity::storage::ActiveModel = existing.into();
        if let Some(url) = &changes.url {
            active.url = ActiveValue::Set(url.clone());
        }
        if let Some(filename) = &changes.filename {
            active.filename = ActiveValue::Set(filename.clone());
        }
        if let Some(original_name) = &changes.original_name {
            active.original_name = ActiveValue::Set(Some(original_name.clone()));
        }
        if let Some(mimetype) = &changes.mimetype {
            active.mimetype = ActiveValue::Set(Some(mimetype.clone()));
        }
        if let Some(size) = changes.size {
            active.size = ActiveValue::Set(Some(size));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Marks a record deleted, stamping `deleted_at`.
    ///
    /// Idempotent: an already-deleted record is returned untouched.
    pub async fn soft_delete(&self, id: i32) -> Result<Option<entity::storage::Model>, DbErr> {
        let Some(existing) = self.find_by_id(id, true).await? else {
            return Ok(None);
        };
        if existing.deleted {
            return Ok(Some(existing));
        }

        let now = Utc::now();
        let mut active: entity::storage::ActiveModel = existing.into();
        active.deleted = ActiveValue::Set(true);
        active.deleted_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);

        Ok(Some(active.update(self.db).await?))
    }

    /// Clears the soft-delete flag and timestamp. The caller is responsible
    /// for checking that the record actually is deleted.
    pub async fn clear_deleted(
        &self,
        model: entity::storage::Model,
    ) -> Result<entity::storage::Model, DbErr> {
        let mut active: entity::storage::ActiveModel = model.into();
        active.deleted = ActiveValue::Set(false);
        active.deleted_at = ActiveValue::Set(None);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await
    }

    /// Physically removes a record (the uploads surface), returning the row
    /// so the caller can remove the on-disk file.
    pub async fn hard_delete(&self, id: i32) -> Result<Option<entity::storage::Model>, DbErr> {
        let Some(existing) = self.find_by_id(id, true).await? else {
            return Ok(None);
        };
        entity::prelude::Storage::delete_by_id(id).exec(self.db).await?;
        Ok(Some(existing))
    }
}
