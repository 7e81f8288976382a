//! Post service: CRUD, soft delete/restore, engagement counters, comments.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::data::page::{PageParams, Paginated};
use crate::data::person::PersonRepository;
use crate::data::post::PostRepository;
use crate::data::storage::StorageRepository;
use crate::error::AppError;
use crate::model::from_json;
use crate::model::person::PersonDto;
use crate::model::post::{CreatePostDto, PostDto, PostListParams, UpdatePostDto};
use crate::model::storage::StorageDto;

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreatePostDto) -> Result<PostDto, AppError> {
        let post = PostRepository::new(self.db).insert(&dto).await?;
        self.resolve_one(post).await
    }

    pub async fn get_all(
        &self,
        params: &PostListParams,
        page: PageParams,
    ) -> Result<Paginated<PostDto>, AppError> {
        let (posts, total) = PostRepository::new(self.db).get_all(params, page).await?;
        let dtos = self.resolve_many(posts).await?;
        Ok(Paginated::new(dtos, total, page))
    }

    pub async fn get_by_id(&self, id: i32, include_deleted: bool) -> Result<PostDto, AppError> {
        let post = PostRepository::new(self.db)
            .find_by_id(id, include_deleted)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;
        self.resolve_one(post).await
    }

    pub async fn update(&self, id: i32, dto: UpdatePostDto) -> Result<PostDto, AppError> {
        let post = PostRepository::new(self.db)
            .update(id, &dto)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;
        self.resolve_one(post).await
    }

    /// Soft-deletes a post. A second delete of the same post still succeeds;
    /// the stored deletion timestamp is left untouched.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        PostRepository::new(self.db)
            .soft_delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;
        Ok(())
    }

    /// Restores a soft-deleted post. Restoring an active post is an
    /// invalid-state error.
    pub async fn restore(&self, id: i32) -> Result<PostDto, AppError> {
        let repo = PostRepository::new(self.db);
        let post = repo
            .find_by_id(id, true)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        if !post.deleted {
            return Err(AppError::InvalidState("Post is not deleted".to_string()));
        }

        let restored = repo.clear_deleted(post).await?;
        self.resolve_one(restored).await
    }

    /// Increments the like counter by exactly one, returning the new value.
    pub async fn like(&self, id: i32) -> Result<i64, AppError> {
        PostRepository::new(self.db)
            .increment_likes(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }

    /// Increments the dislike counter by exactly one, returning the new value.
    pub async fn dislike(&self, id: i32) -> Result<i64, AppError> {
        PostRepository::new(self.db)
            .increment_dislikes(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }

    pub async fn add_comment(&self, id: i32, comment_id: i64) -> Result<PostDto, AppError> {
        let post = PostRepository::new(self.db)
            .push_comment(id, comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;
        self.resolve_one(post).await
    }

    async fn resolve_one(&self, post: entity::post::Model) -> Result<PostDto, AppError> {
        Ok(self
            .resolve_many(vec![post])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::InternalError("Empty resolution result".to_string()))?)
    }

    /// Resolves author and media references for a batch of posts with one
    /// person query and one storage query.
    async fn resolve_many(&self, posts: Vec<entity::post::Model>) -> Result<Vec<PostDto>, AppError> {
        let mut author_ids: Vec<i32> = posts.iter().map(|p| p.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();

        let authors = PersonRepository::new(self.db).find_by_ids(&author_ids).await?;

        let mut storage_ids: Vec<i32> = posts
            .iter()
            .flat_map(|p| from_json::<Vec<i32>>(p.media_ids.clone()))
            .collect();
        storage_ids.extend(
            authors
                .iter()
                .flat_map(|a| [a.avatar_id, a.cover_id])
                .flatten(),
        );
        storage_ids.sort_unstable();
        storage_ids.dedup();

        let files = StorageRepository::new(self.db).find_by_ids(&storage_ids).await?;
        let files_by_id: HashMap<i32, entity::storage::Model> =
            files.into_iter().map(|f| (f.id, f)).collect();

        let authors_by_id: HashMap<i32, PersonDto> = authors
            .into_iter()
            .map(|person| {
                let avatar = person
                    .avatar_id
                    .and_then(|id| files_by_id.get(&id).cloned())
                    .map(StorageDto::from_entity);
                let cover = person
                    .cover_id
                    .and_then(|id| files_by_id.get(&id).cloned())
                    .map(StorageDto::from_entity);
                (person.id, PersonDto::from_person(person, avatar, cover))
            })
            .collect();

        Ok(posts
            .into_iter()
            .map(|post| {
                let author = authors_by_id.get(&post.author_id).cloned();
                let media = from_json::<Vec<i32>>(post.media_ids.clone())
                    .into_iter()
                    .filter_map(|id| files_by_id.get(&id).cloned())
                    .map(StorageDto::from_entity)
                    .collect();
                PostDto::from_entity(post, author, media)
            })
            .collect())
    }
}
