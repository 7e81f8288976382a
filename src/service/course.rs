//! Course service: CRUD with abbreviation normalization and the variation
//! set operations.

use sea_orm::DatabaseConnection;

use crate::data::course::CourseRepository;
use crate::data::page::{PageParams, Paginated};
use crate::error::AppError;
use crate::model::course::{CourseDto, CourseListParams, CreateCourseDto, UpdateCourseDto};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a course. The abbreviation is stored upper-cased.
    pub async fn create(&self, mut dto: CreateCourseDto) -> Result<CourseDto, AppError> {
        let repo = CourseRepository::new(self.db);

        dto.name = dto.name.trim().to_string();
        dto.abbr = dto.abbr.trim().to_uppercase();
        if let Some(variations) = &mut dto.variations {
            for variation in variations.iter_mut() {
                *variation = variation.trim().to_string();
            }
        }

        if repo.find_by_name(&dto.name).await?.is_some() {
            return Err(AppError::Conflict(
                "Course already exists (duplicate name)".to_string(),
            ));
        }

        Ok(CourseDto::from_entity(repo.insert(&dto).await?))
    }

    pub async fn get_all(
        &self,
        params: &CourseListParams,
        page: PageParams,
    ) -> Result<Paginated<CourseDto>, AppError> {
        let normalized = CourseListParams {
            abbr: params.abbr.as_ref().map(|a| a.trim().to_uppercase()),
            ..params.clone()
        };
        let (courses, total) = CourseRepository::new(self.db)
            .get_all(&normalized, page)
            .await?;
        Ok(Paginated::new(
            courses.into_iter().map(CourseDto::from_entity).collect(),
            total,
            page,
        ))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<CourseDto, AppError> {
        CourseRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(CourseDto::from_entity)
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
    }

    /// Lookup by abbreviation, case-insensitive (stored form is upper-cased).
    pub async fn get_by_abbr(&self, abbr: &str) -> Result<CourseDto, AppError> {
        CourseRepository::new(self.db)
            .find_by_abbr(&abbr.trim().to_uppercase())
            .await?
            .map(CourseDto::from_entity)
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
    }

    /// All courses with the given duration in years.
    pub async fn get_by_duration(&self, duration_years: i32) -> Result<Vec<CourseDto>, AppError> {
        let courses = CourseRepository::new(self.db)
            .get_by_duration(duration_years)
            .await?;
        Ok(courses.into_iter().map(CourseDto::from_entity).collect())
    }

    pub async fn update(&self, id: i32, mut dto: UpdateCourseDto) -> Result<CourseDto, AppError> {
        let repo = CourseRepository::new(self.db);

        if let Some(abbr) = &dto.abbr {
            dto.abbr = Some(abbr.trim().to_uppercase());
        }
        if let Some(name) = &dto.name {
            let name = name.trim().to_string();
            if let Some(other) = repo.find_by_name(&name).await? {
                if other.id != id {
                    return Err(AppError::Conflict(
                        "Course already exists (duplicate name)".to_string(),
                    ));
                }
            }
            dto.name = Some(name);
        }

        repo.update(id, &dto)
            .await?
            .map(CourseDto::from_entity)
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CourseRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Course not found".to_string()));
        }
        Ok(())
    }

    /// Adds a name variation (set semantics: duplicates are ignored).
    pub async fn add_variation(&self, id: i32, variation: &str) -> Result<CourseDto, AppError> {
        CourseRepository::new(self.db)
            .add_variation(id, variation.trim())
            .await?
            .map(CourseDto::from_entity)
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
    }

    /// Removes a name variation.
    pub async fn remove_variation(&self, id: i32, variation: &str) -> Result<CourseDto, AppError> {
        CourseRepository::new(self.db)
            .remove_variation(id, variation.trim())
            .await?
            .map(CourseDto::from_entity)
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
    }
}
