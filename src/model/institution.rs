use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::from_json;
use crate::model::storage::StorageDto;

/// The closed set of institution domain categories.
pub const DOMAINS: [&str; 7] = [
    "educacao",
    "ONG",
    "empresa",
    "comercio",
    "GOV",
    "politico",
    "industria",
];

pub const DEFAULT_DOMAIN: &str = "educacao";

/// Public institution representation with media references resolved.
/// Wire names keep the original API's Portuguese field names.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionDto {
    pub id: i32,
    #[serde(rename = "razaoSocial")]
    pub legal_name: String,
    #[serde(rename = "nomeFantasia")]
    pub trade_name: String,
    pub abbr: String,
    pub email: String,
    #[serde(rename = "dominio")]
    pub domains: Vec<String>,
    #[serde(rename = "enderecos")]
    pub addresses: Vec<String>,
    #[serde(rename = "telefone")]
    pub phones: Vec<String>,
    #[serde(rename = "CNPJ")]
    pub tax_id: String,
    #[serde(rename = "mediasId")]
    pub media: Vec<StorageDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InstitutionDto {
    pub fn from_entity(e: entity::institution::Model, media: Vec<StorageDto>) -> Self {
        Self {
            id: e.id,
            legal_name: e.legal_name,
            trade_name: e.trade_name,
            abbr: e.abbr,
            email: e.email,
            domains: from_json(e.domains),
            addresses: from_json(e.addresses),
            phones: from_json(e.phones),
            tax_id: e.tax_id,
            media,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

/// Compact institution representation used when referenced from another
/// entity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionSummaryDto {
    pub id: i32,
    #[serde(rename = "razaoSocial")]
    pub legal_name: String,
    #[serde(rename = "nomeFantasia")]
    pub trade_name: String,
    pub abbr: String,
    #[serde(rename = "dominio")]
    pub domains: Vec<String>,
}

impl InstitutionSummaryDto {
    pub fn from_entity(e: entity::institution::Model) -> Self {
        Self {
            id: e.id,
            legal_name: e.legal_name,
            trade_name: e.trade_name,
            abbr: e.abbr,
            domains: from_json(e.domains),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstitutionDto {
    #[serde(rename = "razaoSocial")]
    pub legal_name: String,
    #[serde(rename = "nomeFantasia")]
    pub trade_name: String,
    pub abbr: String,
    pub email: String,
    #[serde(rename = "dominio", default)]
    pub domains: Option<Vec<String>>,
    #[serde(rename = "enderecos", default)]
    pub addresses: Option<Vec<String>>,
    #[serde(rename = "telefone", default)]
    pub phones: Option<Vec<String>>,
    #[serde(rename = "CNPJ")]
    pub tax_id: String,
    #[serde(rename = "mediasId", default)]
    pub media_ids: Option<Vec<i32>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstitutionDto {
    #[serde(rename = "razaoSocial")]
    pub legal_name: Option<String>,
    #[serde(rename = "nomeFantasia")]
    pub trade_name: Option<String>,
    pub abbr: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "dominio")]
    pub domains: Option<Vec<String>>,
    #[serde(rename = "enderecos")]
    pub addresses: Option<Vec<String>>,
    #[serde(rename = "telefone")]
    pub phones: Option<Vec<String>>,
    #[serde(rename = "CNPJ")]
    pub tax_id: Option<String>,
    #[serde(rename = "mediasId")]
    pub media_ids: Option<Vec<i32>>,
}

/// Filter parameters for the institution listing.
#[derive(Debug, Default, Clone)]
pub struct InstitutionListParams {
    pub domain: Option<String>,
    pub search: Option<String>,
}
