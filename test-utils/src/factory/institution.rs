//! Institution factory for creating test institution entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

use crate::factory::helpers::{empty_list, next_id};

pub struct InstitutionFactory<'a> {
    db: &'a DatabaseConnection,
    legal_name: String,
    trade_name: String,
    abbr: String,
    email: String,
    domains: Vec<String>,
    tax_id: String,
    media_ids: Vec<i32>,
}

impl<'a> InstitutionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            legal_name: format!("Institution {} LTDA", id),
            trade_name: format!("Institution {}", id),
            abbr: format!("INST{}", id),
            email: format!("contact{}@institution.example", id),
            domains: vec!["educacao".to_string()],
            // Unique per factory call; not a checksum-valid CNPJ.
            tax_id: format!("{:014}", id),
            media_ids: Vec::new(),
        }
    }

    pub fn legal_name(mut self, legal_name: impl Into<String>) -> Self {
        self.legal_name = legal_name.into();
        self
    }

    pub fn domains(mut self, domains: Vec<String>) -> Self {
        self.domains = domains;
        self
    }

    pub fn tax_id(mut self, tax_id: impl Into<String>) -> Self {
        self.tax_id = tax_id.into();
        self
    }

    pub fn media_ids(mut self, media_ids: Vec<i32>) -> Self {
        self.media_ids = media_ids;
        self
    }

    pub async fn build(self) -> Result<entity::institution::Model, DbErr> {
        let now = Utc::now();
        entity::institution::ActiveModel {
            legal_name: ActiveValue::Set(self.legal_name),
            trade_name: ActiveValue::Set(self.trade_name),
            abbr: ActiveValue::Set(self.abbr),
            email: ActiveValue::Set(self.email),
            domains: ActiveValue::Set(json!(self.domains)),
            addresses: ActiveValue::Set(empty_list()),
            phones: ActiveValue::Set(empty_list()),
            tax_id: ActiveValue::Set(self.tax_id),
            media_ids: ActiveValue::Set(json!(self.media_ids)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an institution with default values.
pub async fn create_institution(
    db: &DatabaseConnection,
) -> Result<entity::institution::Model, DbErr> {
    InstitutionFactory::new(db).build().await
}
