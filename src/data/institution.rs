//! Institution data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::data::page::PageParams;
use crate::model::institution::{
    CreateInstitutionDto, InstitutionListParams, UpdateInstitutionDto, DEFAULT_DOMAIN,
};
use crate::model::json_value;

pub struct InstitutionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InstitutionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        param: &CreateInstitutionDto,
    ) -> Result<entity::institution::Model, DbErr> {
        let now = Utc::now();
        let domains = match &param.domains {
            Some(domains) if !domains.is_empty() => domains.clone(),
            _ => vec![DEFAULT_DOMAIN.to_string()],
        };
        entity::institution::ActiveModel {
            legal_name: ActiveValue::Set(param.legal_name.clone()),
            trade_name: ActiveValue::Set(param.trade_name.clone()),
            abbr: ActiveValue::Set(param.abbr.clone()),
            email: ActiveValue::Set(param.email.clone()),
            domains: ActiveValue::Set(json_value(&domains)),
            addresses: ActiveValue::Set(json_value(&param.addresses.clone().unwrap_or_default())),
            phones: ActiveValue::Set(json_value(&param.phones.clone().unwrap_or_default())),
            tax_id: ActiveValue::Set(param.tax_id.clone()),
            media_ids: ActiveValue::Set(json_value(&param.media_ids.clone().unwrap_or_default())),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::institution::Model>, DbErr> {
        entity::prelude::Institution::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_legal_name(
        &self,
        legal_name: &str,
    ) -> Result<Option<entity::institution::Model>, DbErr> {
        entity::prelude::Institution::find()
            .filter(entity::institution::Column::LegalName.eq(legal_name))
            .one(self.db)
            .await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::institution::Model>, DbErr> {
        entity::prelude::Institution::find()
            .filter(entity::institution::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn find_by_tax_id(
        &self,
        tax_id: &str,
    ) -> Result<Option<entity::institution::Model>, DbErr> {
        entity::prelude::Institution::find()
            .filter(entity::institution::Column::TaxId.eq(tax_id))
            .one(self.db)
            .await
    }

    /// Batch lookup used when resolving institution references on
    /// assignatures.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::institution::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        entity::prelude::Institution::find()
            .filter(entity::institution::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Gets institutions with filtering and pagination, newest first.
    pub async fn get_all(
        &self,
        params: &InstitutionListParams,
        page: PageParams,
    ) -> Result<(Vec<entity::institution::Model>, u64), DbErr> {
        let mut cond = Condition::all();

        if let Some(domain) = &params.domain {
            // Membership test against the JSON-encoded domain array.
            cond =
                cond.add(entity::institution::Column::Domains.contains(format!("\"{}\"", domain)));
        }
        if let Some(search) = &params.search {
            cond = cond.add(
                Condition::any()
                    .add(entity::institution::Column::LegalName.contains(search.as_str()))
                    .add(entity::institution::Column::TradeName.contains(search.as_str()))
                    .add(entity::institution::Column::Abbr.contains(search.as_str())),
            );
        }

        let paginator = entity::prelude::Institution::find()
            .filter(cond)
            .order_by_desc(entity::institution::Column::CreatedAt)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.zero_indexed()).await?;

        Ok((entities, total))
    }

    /// All institutions tagged with the given domain category, newest first.
    pub async fn get_by_domain(
        &self,
        domain: &str,
    ) -> Result<Vec<entity::institution::Model>, DbErr> {
        entity::prelude::Institution::find()
            .filter(entity::institution::Column::Domains.contains(format!("\"{}\"", domain)))
            .order_by_desc(entity::institution::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        changes: &UpdateInstitutionDto,
    ) -> Result<Option<entity::institution::Model>, DbErr> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::institution::ActiveModel = existing.into();
        if let Some(legal_name) = &changes.legal_name {
            active.legal_name = ActiveValue::Set(legal_name.clone());
        }
        if let Some(trade_name) = &changes.trade_name {
            active.trade_name = ActiveValue::Set(trade_name.clone());
        }
        if let Some(abbr) = &changes.abbr {
            active.abbr = ActiveValue::Set(abbr.clone());
        }
        if let Some(email) = &changes.email {
            active.email = ActiveValue::Set(email.clone());
        }
        if let Some(domains) = &changes.domains {
            active.domains = ActiveValue::Set(json_value(domains));
        }
        if let Some(addresses) = &changes.addresses {
            active.addresses = ActiveValue::Set(json_value(addresses));
        }
        if let Some(phones) = &changes.phones {
            active.phones = ActiveValue::Set(json_value(phones));
        }
        if let Some(tax_id) = &changes.tax_id {
            active.tax_id = ActiveValue::Set(tax_id.clone());
        }
        if let Some(media_ids) = &changes.media_ids {
            active.media_ids = ActiveValue::Set(json_value(media_ids));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Institution::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
