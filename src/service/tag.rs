//! Tag service: CRUD plus name/color/popularity lookups.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::data::page::{PageParams, Paginated};
use crate::data::storage::StorageRepository;
use crate::data::tag::TagRepository;
use crate::error::AppError;
use crate::model::storage::StorageDto;
use crate::model::tag::{CreateTagDto, TagDto, TagListParams, UpdateTagDto};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, mut dto: CreateTagDto) -> Result<TagDto, AppError> {
        let repo = TagRepository::new(self.db);

        dto.tag_name = dto.tag_name.trim().to_string();
        dto.description = dto.description.trim().to_string();
        dto.color = dto.color.trim().to_string();

        if repo.find_by_name(&dto.tag_name).await?.is_some() {
            return Err(AppError::Conflict(
                "Tag already exists (duplicate tag name)".to_string(),
            ));
        }

        let tag = repo.insert(&dto).await?;
        self.resolve_one(tag).await
    }

    pub async fn get_all(
        &self,
        params: &TagListParams,
        page: PageParams,
    ) -> Result<Paginated<TagDto>, AppError> {
        let (tags, total) = TagRepository::new(self.db).get_all(params, page).await?;
        let dtos = self.resolve_many(tags).await?;
        Ok(Paginated::new(dtos, total, page))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<TagDto, AppError> {
        let tag = TagRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tag not found".to_string()))?;
        self.resolve_one(tag).await
    }

    pub async fn get_by_name(&self, tag_name: &str) -> Result<TagDto, AppError> {
        let tag = TagRepository::new(self.db)
            .find_by_name(tag_name)
            .await?
            .ok_or_else(|| AppError::NotFound("Tag not found".to_string()))?;
        self.resolve_one(tag).await
    }

    /// Most recently created tags, up to `limit`.
    pub async fn get_popular(&self, limit: u64) -> Result<Vec<TagDto>, AppError> {
        let tags = TagRepository::new(self.db).get_popular(limit).await?;
        self.resolve_many(tags).await
    }

    /// All tags with an exact color value.
    pub async fn get_by_color(&self, color: &str) -> Result<Vec<TagDto>, AppError> {
        let tags = TagRepository::new(self.db).get_by_color(color).await?;
        self.resolve_many(tags).await
    }

    pub async fn update(&self, id: i32, dto: UpdateTagDto) -> Result<TagDto, AppError> {
        let repo = TagRepository::new(self.db);

        if let Some(tag_name) = &dto.tag_name {
            if let Some(other) = repo.find_by_name(tag_name.trim()).await? {
                if other.id != id {
                    return Err(AppError::Conflict(
                        "Tag already exists (duplicate tag name)".to_string(),
                    ));
                }
            }
        }

        let tag = repo
            .update(id, &dto)
            .await?
            .ok_or_else(|| AppError::NotFound("Tag not found".to_string()))?;
        self.resolve_one(tag).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !TagRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Tag not found".to_string()));
        }
        Ok(())
    }

    async fn resolve_one(&self, tag: entity::tag::Model) -> Result<TagDto, AppError> {
        Ok(self
            .resolve_many(vec![tag])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::InternalError("Empty resolution result".to_string()))?)
    }

    /// Attaches referenced media storage records with one batched lookup.
    async fn resolve_many(&self, tags: Vec<entity::tag::Model>) -> Result<Vec<TagDto>, AppError> {
        let mut storage_ids: Vec<i32> = tags.iter().filter_map(|t| t.media_id).collect();
        storage_ids.sort_unstable();
        storage_ids.dedup();

        let files = StorageRepository::new(self.db).find_by_ids(&storage_ids).await?;
        let files_by_id: HashMap<i32, entity::storage::Model> =
            files.into_iter().map(|f| (f.id, f)).collect();

        Ok(tags
            .into_iter()
            .map(|tag| {
                let media = tag
                    .media_id
                    .and_then(|id| files_by_id.get(&id).cloned())
                    .map(StorageDto::from_entity);
                TagDto::from_entity(tag, media)
            })
            .collect())
    }
}
