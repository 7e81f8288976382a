//! Assignature service: CRUD, engagement counters, reference resolution.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::data::assignature::AssignatureRepository;
use crate::data::institution::InstitutionRepository;
use crate::data::page::{PageParams, Paginated};
use crate::data::post::PostRepository;
use crate::data::storage::StorageRepository;
use crate::data::tag::TagRepository;
use crate::error::AppError;
use crate::model::assignature::{
    AssignatureDto, AssignatureListParams, AssignatureRefs, CreateAssignatureDto,
    UpdateAssignatureDto,
};
use crate::model::institution::InstitutionSummaryDto;
use crate::model::post::PostSummaryDto;
use crate::model::storage::StorageDto;
use crate::model::tag::TagDto;

pub struct AssignatureService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssignatureService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateAssignatureDto) -> Result<AssignatureDto, AppError> {
        let assignature = AssignatureRepository::new(self.db).insert(&dto).await?;
        self.resolve_one(assignature).await
    }

    pub async fn get_all(
        &self,
        params: &AssignatureListParams,
        page: PageParams,
    ) -> Result<Paginated<AssignatureDto>, AppError> {
        let (assignatures, total) = AssignatureRepository::new(self.db)
            .get_all(params, page)
            .await?;
        let dtos = self.resolve_many(assignatures).await?;
        Ok(Paginated::new(dtos, total, page))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<AssignatureDto, AppError> {
        let assignature = AssignatureRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Assignature not found".to_string()))?;
        self.resolve_one(assignature).await
    }

    pub async fn update(
        &self,
        id: i32,
        dto: UpdateAssignatureDto,
    ) -> Result<AssignatureDto, AppError> {
        let assignature = AssignatureRepository::new(self.db)
            .update(id, &dto)
            .await?
            .ok_or_else(|| AppError::NotFound("Assignature not found".to_string()))?;
        self.resolve_one(assignature).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !AssignatureRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Assignature not found".to_string()));
        }
        Ok(())
    }

    /// Increments the like counter by exactly one, returning the new value.
    pub async fn like(&self, id: i32) -> Result<i64, AppError> {
        AssignatureRepository::new(self.db)
            .increment_likes(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Assignature not found".to_string()))
    }

    /// Increments the dislike counter by exactly one, returning the new value.
    pub async fn dislike(&self, id: i32) -> Result<i64, AppError> {
        AssignatureRepository::new(self.db)
            .increment_dislikes(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Assignature not found".to_string()))
    }

    async fn resolve_one(
        &self,
        assignature: entity::assignature::Model,
    ) -> Result<AssignatureDto, AppError> {
        Ok(self
            .resolve_many(vec![assignature])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::InternalError("Empty resolution result".to_string()))?)
    }

    /// Resolves media, tag, feedback and institution references for a batch
    /// of assignatures with one query per referenced table. Module, task and
    /// classroom ids stay opaque.
    async fn resolve_many(
        &self,
        assignatures: Vec<entity::assignature::Model>,
    ) -> Result<Vec<AssignatureDto>, AppError> {
        let refs: Vec<AssignatureRefs> =
            assignatures.iter().map(AssignatureRefs::from_entity).collect();

        let mut storage_ids: Vec<i32> = refs.iter().flat_map(|r| r.media_ids.clone()).collect();
        storage_ids.sort_unstable();
        storage_ids.dedup();
        let mut tag_ids: Vec<i32> = refs.iter().flat_map(|r| r.tag_ids.clone()).collect();
        tag_ids.sort_unstable();
        tag_ids.dedup();
        let mut post_ids: Vec<i32> = refs.iter().flat_map(|r| r.feedback_ids.clone()).collect();
        post_ids.sort_unstable();
        post_ids.dedup();
        let mut institution_ids: Vec<i32> =
            refs.iter().flat_map(|r| r.institution_ids.clone()).collect();
        institution_ids.sort_unstable();
        institution_ids.dedup();

        let files = StorageRepository::new(self.db).find_by_ids(&storage_ids).await?;
        let tags = TagRepository::new(self.db).find_by_ids(&tag_ids).await?;
        let posts = PostRepository::new(self.db).find_by_ids(&post_ids).await?;
        let institutions = InstitutionRepository::new(self.db)
            .find_by_ids(&institution_ids)
            .await?;

        let files_by_id: HashMap<i32, entity::storage::Model> =
            files.into_iter().map(|f| (f.id, f)).collect();
        let tags_by_id: HashMap<i32, entity::tag::Model> =
            tags.into_iter().map(|t| (t.id, t)).collect();
        let posts_by_id: HashMap<i32, entity::post::Model> =
            posts.into_iter().map(|p| (p.id, p)).collect();
        let institutions_by_id: HashMap<i32, entity::institution::Model> =
            institutions.into_iter().map(|i| (i.id, i)).collect();

        Ok(assignatures
            .into_iter()
            .zip(refs)
            .map(|(assignature, refs)| {
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
                let institutions = refs
                    .institution_ids
                    .iter()
                    .filter_map(|id| institutions_by_id.get(id).cloned())
                    .map(InstitutionSummaryDto::from_entity)
                    .collect();
                AssignatureDto::from_entity(assignature, media, tags, feedbacks, institutions)
            })
            .collect())
    }
}
