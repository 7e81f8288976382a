//! Course data repository.
//!
//! Courses sort alphabetically by name rather than by creation time, and the
//! abbreviation is stored upper-cased (the service normalizes before calling
//! in here).

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::data::page::PageParams;
use crate::model::course::{CourseListParams, CreateCourseDto, UpdateCourseDto};
use crate::model::{from_json, json_value};

pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(&self, param: &CreateCourseDto) -> Result<entity::course::Model, DbErr> {
        let now = Utc::now();
        entity::course::ActiveModel {
            name: ActiveValue::Set(param.name.clone()),
            duration_years: ActiveValue::Set(param.duration_years),
            abbr: ActiveValue::Set(param.abbr.clone()),
            variations: ActiveValue::Set(json_value(&param.variations.clone().unwrap_or_default())),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::course::Model>, DbErr> {
        entity::prelude::Course::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::course::Model>, DbErr> {
        entity::prelude::Course::find()
            .filter(entity::course::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Lookup by the (upper-cased) abbreviation.
    pub async fn find_by_abbr(&self, abbr: &str) -> Result<Option<entity::course::Model>, DbErr> {
        entity::prelude::Course::find()
            .filter(entity::course::Column::Abbr.eq(abbr))
            .one(self.db)
            .await
    }

    /// Gets courses with filtering and pagination, ordered by name.
    pub async fn get_all(
        &self,
        params: &CourseListParams,
        page: PageParams,
    ) -> Result<(Vec<entity::course::Model>, u64), DbErr> {
        let mut cond = Condition::all();

        if let Some(duration_years) = params.duration_years {
            cond = cond.add(entity::course::Column::DurationYears.eq(duration_years));
        }
        if let Some(abbr) = &params.abbr {
            cond = cond.add(entity::course::Column::Abbr.eq(abbr));
        }
        if let Some(search) = &params.search {
            cond = cond.add(
                Condition::any()
                    .add(entity::course::Column::Name.contains(search.as_str()))
                    .add(entity::course::Column::Abbr.contains(search.as_str()))
                    .add(entity::course::Column::Variations.contains(search.as_str())),
            );
        }

        let paginator = entity::prelude::Course::find()
            .filter(cond)
            .order_by_asc(entity::course::Column::Name)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.zero_indexed()).await?;

        Ok((entities, total))
    }

    /// All courses of a given duration, ordered by name.
    pub async fn get_by_duration(
        &self,
        duration_years: i32,
    ) -> Result<Vec<entity::course::Model>, DbErr> {
        entity::prelude::Course::find()
            .filter(entity::course::Column::DurationYears.eq(duration_years))
            .order_by_asc(entity::course::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        changes: &UpdateCourseDto,
    ) -> Result<Option<entity::course::Model>, DbErr> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::course::ActiveModel = existing.into();
        if let Some(name) = &changes.name {
            active.name = ActiveValue::Set(name.clone());
        }
        if let Some(duration_years) = changes.duration_years {
            active.duration_years = ActiveValue::Set(duration_years);
        }
        if let Some(abbr) = &changes.abbr {
            active.abbr = ActiveValue::Set(abbr.clone());
        }
        if let Some(variations) = &changes.variations {
            active.variations = ActiveValue::Set(json_value(variations));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Course::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Adds a name variation, set-style: adding an existing variation is a
    /// no-op.
    pub async fn add_variation(
        &self,
        id: i32,
        variation: &str,
    ) -> Result<Option<entity::course::Model>, DbErr> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut variations: Vec<String> = from_json(existing.variations.clone());
        if variations.iter().any(|v| v == variation) {
            return Ok(Some(existing));
        }
        variations.push(variation.to_string());

        let mut active: entity::course::ActiveModel = existing.into();
        active.variations = ActiveValue::Set(json_value(&variations));
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Removes every occurrence of a name variation.
    pub async fn remove_variation(
        &self,
        id: i32,
        variation: &str,
    ) -> Result<Option<entity::course::Model>, DbErr> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut variations: Vec<String> = from_json(existing.variations.clone());
        variations.retain(|v| v != variation);

        let mut active: entity::course::ActiveModel = existing.into();
        active.variations = ActiveValue::Set(json_value(&variations));
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }
}
