use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::from_json;

/// Public course representation. Wire names keep the original API's
/// Portuguese field names.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: i32,
    #[serde(rename = "curso")]
    pub name: String,
    #[serde(rename = "anos")]
    pub duration_years: i32,
    pub abbr: String,
    #[serde(rename = "variacoes")]
    pub variations: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CourseDto {
    pub fn from_entity(e: entity::course::Model) -> Self {
        Self {
            id: e.id,
            name: e.name,
            duration_years: e.duration_years,
            abbr: e.abbr,
            variations: from_json(e.variations),
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateCourseDto {
    #[serde(rename = "curso")]
    pub name: String,
    #[serde(rename = "anos")]
    pub duration_years: i32,
    pub abbr: String,
    #[serde(rename = "variacoes", default)]
    pub variations: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateCourseDto {
    #[serde(rename = "curso")]
    pub name: Option<String>,
    #[serde(rename = "anos")]
    pub duration_years: Option<i32>,
    pub abbr: Option<String>,
    #[serde(rename = "variacoes")]
    pub variations: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct VariationDto {
    #[serde(rename = "variacao")]
    pub variation: String,
}

/// Filter parameters for the course listing.
#[derive(Debug, Default, Clone)]
pub struct CourseListParams {
    pub duration_years: Option<i32>,
    pub abbr: Option<String>,
    pub search: Option<String>,
}
