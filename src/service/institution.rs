//! Institution service: CRUD with three unique fields and domain lookups.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::data::institution::InstitutionRepository;
use crate::data::page::{PageParams, Paginated};
use crate::data::storage::StorageRepository;
use crate::error::AppError;
use crate::model::from_json;
use crate::model::institution::{
    CreateInstitutionDto, InstitutionDto, InstitutionListParams, UpdateInstitutionDto,
};
use crate::model::storage::StorageDto;

pub struct InstitutionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InstitutionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateInstitutionDto) -> Result<InstitutionDto, AppError> {
        let repo = InstitutionRepository::new(self.db);

        if repo.find_by_legal_name(dto.legal_name.trim()).await?.is_some() {
            return Err(AppError::Conflict(
                "Institution legal name already exists".to_string(),
            ));
        }
        if repo.find_by_email(dto.email.trim()).await?.is_some() {
            return Err(AppError::Conflict(
                "Institution email already exists".to_string(),
            ));
        }
        if repo.find_by_tax_id(dto.tax_id.trim()).await?.is_some() {
            return Err(AppError::Conflict(
                "Institution CNPJ already exists".to_string(),
            ));
        }

        let institution = repo.insert(&dto).await?;
        self.resolve_one(institution).await
    }

    pub async fn get_all(
        &self,
        params: &InstitutionListParams,
        page: PageParams,
    ) -> Result<Paginated<InstitutionDto>, AppError> {
        let (institutions, total) = InstitutionRepository::new(self.db)
            .get_all(params, page)
            .await?;
        let dtos = self.resolve_many(institutions).await?;
        Ok(Paginated::new(dtos, total, page))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<InstitutionDto, AppError> {
        let institution = InstitutionRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Institution not found".to_string()))?;
        self.resolve_one(institution).await
    }

    /// All institutions in a domain category (already validated against the
    /// closed set by the controller).
    pub async fn get_by_domain(&self, domain: &str) -> Result<Vec<InstitutionDto>, AppError> {
        let institutions = InstitutionRepository::new(self.db).get_by_domain(domain).await?;
        self.resolve_many(institutions).await
    }

    pub async fn update(
        &self,
        id: i32,
        dto: UpdateInstitutionDto,
    ) -> Result<InstitutionDto, AppError> {
        let repo = InstitutionRepository::new(self.db);

        if let Some(legal_name) = &dto.legal_name {
            if let Some(other) = repo.find_by_legal_name(legal_name.trim()).await? {
                if other.id != id {
                    return Err(AppError::Conflict(
                        "Institution legal name already exists".to_string(),
                    ));
                }
            }
        }
        if let Some(email) = &dto.email {
            if let Some(other) = repo.find_by_email(email.trim()).await? {
                if other.id != id {
                    return Err(AppError::Conflict(
                        "Institution email already exists".to_string(),
                    ));
                }
            }
        }
        if let Some(tax_id) = &dto.tax_id {
            if let Some(other) = repo.find_by_tax_id(tax_id.trim()).await? {
                if other.id != id {
                    return Err(AppError::Conflict(
                        "Institution CNPJ already exists".to_string(),
                    ));
                }
            }
        }

        let institution = repo
            .update(id, &dto)
            .await?
            .ok_or_else(|| AppError::NotFound("Institution not found".to_string()))?;
        self.resolve_one(institution).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !InstitutionRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Institution not found".to_string()));
        }
        Ok(())
    }

    async fn resolve_one(
        &self,
        institution: entity::institution::Model,
    ) -> Result<InstitutionDto, AppError> {
        Ok(self
            .resolve_many(vec![institution])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::InternalError("Empty resolution result".to_string()))?)
    }

    /// Attaches referenced media storage records with one batched lookup.
    async fn resolve_many(
        &self,
        institutions: Vec<entity::institution::Model>,
    ) -> Result<Vec<InstitutionDto>, AppError> {
        let mut storage_ids: Vec<i32> = institutions
            .iter()
            .flat_map(|i| from_json::<Vec<i32>>(i.media_ids.clone()))
            .collect();
        storage_ids.sort_unstable();
        storage_ids.dedup();

        let files = StorageRepository::new(self.db).find_by_ids(&storage_ids).await?;
        let files_by_id: HashMap<i32, entity::storage::Model> =
            files.into_iter().map(|f| (f.id, f)).collect();

        Ok(institutions
            .into_iter()
            .map(|institution| {
                let media = from_json::<Vec<i32>>(institution.media_ids.clone())
                    .into_iter()
                    .filter_map(|id| files_by_id.get(&id).cloned())
                    .map(StorageDto::from_entity)
                    .collect();
                InstitutionDto::from_entity(institution, media)
            })
            .collect())
    }
}
