use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::from_json;
use crate::model::institution::InstitutionSummaryDto;
use crate::model::post::PostSummaryDto;
use crate::model::storage::StorageDto;
use crate::model::tag::TagDto;

/// The closed set of assignature education levels.
pub const ASSIGNATURE_TYPES: [&str; 12] = [
    "superior",
    "ensino médio",
    "EAD",
    "ensino fundamental",
    "infantil",
    "pós-graduação",
    "MBA",
    "master",
    "curso",
    "técnico",
    "certificação",
    "other",
];

pub const DEFAULT_ASSIGNATURE_TYPE: &str = "superior";

/// Public assignature representation with media, tag, feedback and
/// institution references resolved. Module/task/classroom ids stay opaque.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignatureDto {
    pub id: i32,
    pub tag_name: String,
    #[serde(rename = "type")]
    pub assignature_type: String,
    pub description: String,
    #[serde(rename = "mediasId")]
    pub media: Vec<StorageDto>,
    #[serde(rename = "modulesId")]
    pub module_ids: Vec<i64>,
    #[serde(rename = "tasksId")]
    pub task_ids: Vec<i64>,
    #[serde(rename = "classroomsId")]
    pub classroom_ids: Vec<i64>,
    #[serde(rename = "institutionsId")]
    pub institutions: Vec<InstitutionSummaryDto>,
    pub likes: i64,
    pub dislikes: i64,
    pub feedbacks: Vec<PostSummaryDto>,
    pub tags: Vec<TagDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AssignatureDto {
    pub fn from_entity(
        e: entity::assignature::Model,
        media: Vec<StorageDto>,
        tags: Vec<TagDto>,
        feedbacks: Vec<PostSummaryDto>,
        institutions: Vec<InstitutionSummaryDto>,
    ) -> Self {
        Self {
            id: e.id,
            tag_name: e.tag_name,
            assignature_type: e.assignature_type,
            description: e.description,
            media,
            module_ids: from_json(e.module_ids),
            task_ids: from_json(e.task_ids),
            classroom_ids: from_json(e.classroom_ids),
            institutions,
            likes: e.likes,
            dislikes: e.dislikes,
            feedbacks,
            tags,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignatureDto {
    pub tag_name: String,
    #[serde(rename = "type", default)]
    pub assignature_type: Option<String>,
    pub description: String,
    #[serde(rename = "mediasId", default)]
    pub media_ids: Option<Vec<i32>>,
    #[serde(rename = "modulesId", default)]
    pub module_ids: Option<Vec<i64>>,
    #[serde(rename = "tasksId", default)]
    pub task_ids: Option<Vec<i64>>,
    #[serde(rename = "classroomsId", default)]
    pub classroom_ids: Option<Vec<i64>>,
    #[serde(rename = "institutionsId", default)]
    pub institution_ids: Option<Vec<i32>>,
    #[serde(default)]
    pub feedbacks: Option<Vec<i32>>,
    #[serde(default)]
    pub tags: Option<Vec<i32>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssignatureDto {
    pub tag_name: Option<String>,
    #[serde(rename = "type")]
    pub assignature_type: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "mediasId")]
    pub media_ids: Option<Vec<i32>>,
    #[serde(rename = "modulesId")]
    pub module_ids: Option<Vec<i64>>,
    #[serde(rename = "tasksId")]
    pub task_ids: Option<Vec<i64>>,
    #[serde(rename = "classroomsId")]
    pub classroom_ids: Option<Vec<i64>>,
    #[serde(rename = "institutionsId")]
    pub institution_ids: Option<Vec<i32>>,
    pub feedbacks: Option<Vec<i32>>,
    pub tags: Option<Vec<i32>>,
}

/// Filter parameters for the assignature listing.
#[derive(Debug, Default, Clone)]
pub struct AssignatureListParams {
    pub assignature_type: Option<String>,
    pub search: Option<String>,
}

/// Decoded JSON reference lists of an assignature row.
pub struct AssignatureRefs {
    pub media_ids: Vec<i32>,
    pub tag_ids: Vec<i32>,
    pub feedback_ids: Vec<i32>,
    pub institution_ids: Vec<i32>,
}

impl AssignatureRefs {
    pub fn from_entity(e: &entity::assignature::Model) -> Self {
        Self {
            media_ids: from_json(e.media_ids.clone()),
            tag_ids: from_json(e.tags.clone()),
            feedback_ids: from_json(e.feedbacks.clone()),
            institution_ids: from_json(e.institution_ids.clone()),
        }
    }
}
