//! SeaORM implementation of LeadRequestRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{
    CreateLeadRequestInput, DomainError, LeadRequest, LeadRequestFilter, LeadRequestRepository,
    LeadStatus,
};
use crate::models::lead_request::{self, ActiveModel, Column, Entity as LeadRequestEntity};

/// SeaORM-based implementation of LeadRequestRepository
pub struct SeaOrmLeadRequestRepository {
    db: DatabaseConnection,
}

impl SeaOrmLeadRequestRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(lr: lead_request::Model) -> LeadRequest {
    LeadRequest {
        id: lr.id,
        user_id: lr.user_id,
        request_type_id: lr.request_type_id,
        lead_request_type: lr.lead_request_type,
        lead_area_type: lr.lead_area_type,
        dealer_code: lr.dealer_code,
        state: lr.state,
        lead_area_requested: lr.lead_area_requested,
        date_needed_by: lr.date_needed_by,
        notes: lr.notes,
        status: lr.status,
        created_at: lr.created_at,
        updated_at: lr.updated_at,
    }
}

#[async_trait]
impl LeadRequestRepository for SeaOrmLeadRequestRepository {
    async fn find_all(&self, filter: LeadRequestFilter) -> Result<Vec<LeadRequest>, DomainError> {
        let mut condition = Condition::all();

        if let Some(owner_id) = filter.owner_id {
            condition = condition.add(Column::UserId.eq(owner_id));
        }

        // Id breaks ties between rows created within the same timestamp
        let requests = LeadRequestEntity::find()
            .filter(condition)
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(requests.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<LeadRequest>, DomainError> {
        let lr = LeadRequestEntity::find_by_id(id).one(&self.db).await?;
        Ok(lr.map(to_domain))
    }

    async fn create(&self, input: CreateLeadRequestInput) -> Result<LeadRequest, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();
        let form = input.form;

        let lr = ActiveModel {
            user_id: Set(input.user_id),
            request_type_id: Set(form.request_type_id),
            lead_request_type: Set(form.lead_request_type),
            lead_area_type: Set(form.lead_area_type),
            dealer_code: Set(form.dealer_code),
            state: Set(form.state),
            lead_area_requested: Set(form.lead_area_requested),
            date_needed_by: Set(form.date_needed_by),
            notes: Set(form.notes),
            status: Set(input.status.as_str().to_string()),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = lr.insert(&self.db).await?;
        Ok(to_domain(result))
    }

    async fn update_status(
        &self,
        id: i32,
        status: LeadStatus,
        updated_at: String,
    ) -> Result<LeadRequest, DomainError> {
        let existing = LeadRequestEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::NotFound("Request not found".to_string()))?;

        let mut active: ActiveModel = existing.into();
        active.status = Set(status.as_str().to_string());
        active.updated_at = Set(updated_at);

        let updated = active.update(&self.db).await?;
        Ok(to_domain(updated))
    }
}
