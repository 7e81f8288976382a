//! Item service: CRUD, engagement counters, reference resolution.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::data::item::ItemRepository;
use crate::data::page::{PageParams, Paginated};
use crate::data::post::PostRepository;
use crate::data::storage::StorageRepository;
use crate::data::tag::TagRepository;
use crate::error::AppError;
use crate::model::item::{CreateItemDto, ItemDto, ItemListParams, ItemRefs, UpdateItemDto};
use crate::model::post::PostSummaryDto;
use crate::model::storage::StorageDto;
use crate::model::tag::TagDto;

pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateItemDto) -> Result<ItemDto, AppError> {
        let item = ItemRepository::new(self.db).insert(&dto).await?;
        self.resolve_one(item).await
    }

    pub async fn get_all(
        &self,
        params: &ItemListParams,
        page: PageParams,
    ) -> Result<Paginated<ItemDto>, AppError> {
        let (items, total) = ItemRepository::new(self.db).get_all(params, page).await?;
        let dtos = self.resolve_many(items).await?;
        Ok(Paginated::new(dtos, total, page))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ItemDto, AppError> {
        let item = ItemRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;
        self.resolve_one(item).await
    }

    pub async fn update(&self, id: i32, dto: UpdateItemDto) -> Result<ItemDto, AppError> {
        let item = ItemRepository::new(self.db)
            .update(id, &dto)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;
        self.resolve_one(item).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ItemRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Item not found".to_string()));
        }
        Ok(())
    }

    /// Increments the like counter by exactly one, returning the new value.
    pub async fn like(&self, id: i32) -> Result<i64, AppError> {
        ItemRepository::new(self.db)
            .increment_likes(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))
    }

    /// Increments the dislike counter by exactly one, returning the new value.
    pub async fn dislike(&self, id: i32) -> Result<i64, AppError> {
        ItemRepository::new(self.db)
            .increment_dislikes(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))
    }

    async fn resolve_one(&self, item: entity::item::Model) -> Result<ItemDto, AppError> {
        Ok(self
            .resolve_many(vec![item])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::InternalError("Empty resolution result".to_string()))?)
    }

    /// Resolves media, tag and feedback references for a batch of items with
    /// one query per referenced table. Dead references drop out silently.
    async fn resolve_many(&self, items: Vec<entity::item::Model>) -> Result<Vec<ItemDto>, AppError> {
        let refs: Vec<ItemRefs> = items.iter().map(ItemRefs::from_entity).collect();

        let mut storage_ids: Vec<i32> = refs.iter().flat_map(|r| r.media_ids.clone()).collect();
        storage_ids.sort_unstable();
        storage_ids.dedup();
        let mut tag_ids: Vec<i32> = refs.iter().flat_map(|r| r.tag_ids.clone()).collect();
        tag_ids.sort_unstable();
        tag_ids.dedup();
        let mut post_ids: Vec<i32> = refs.iter().flat_map(|r| r.feedback_ids.clone()).collect();
        post_ids.sort_unstable();
        post_ids.dedup();

        let files = StorageRepository::new(self.db).find_by_ids(&storage_ids).await?;
        let tags = TagRepository::new(self.db).find_by_ids(&tag_ids).await?;
        let posts = PostRepository::new(self.db).find_by_ids(&post_ids).await?;

        let files_by_id: HashMap<i32, entity::storage::Model> =
            files.into_iter().map(|f| (f.id, f)).collect();
        let tags_by_id: HashMap<i32, entity::tag::Model> =
            tags.into_iter().map(|t| (t.id, t)).collect();
        let posts_by_id: HashMap<i32, entity::post::Model> =
            posts.into_iter().map(|p| (p.id, p)).collect();

        Ok(items
            .into_iter()
            .zip(refs)
            .map(|(item, refs)| {
                let media = refs
                    .media_ids
                    .iter()
                    .filter_map(|id| files_by_id.get(id).cloned())
                    .map(StorageDto::from_entity)
                    .collect();
                let tags = refs
                    .tag_ids
                    .iter()
                    .filter_map(|id| tags_by_id.get(id).cloned())
                    .map(|t| TagDto::from_entity(t, None))
                    .collect();
                let feedbacks = refs
                    .feedback_ids
                    .iter()
                    .filter_map(|id| posts_by_id.get(id).cloned())
                    .map(PostSummaryDto::from_entity)
                    .collect();
                ItemDto::from_entity(item, media, tags, feedbacks)
            })
            .collect())
    }
}
