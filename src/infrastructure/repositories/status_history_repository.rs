//! SeaORM implementation of StatusHistoryRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::{DomainError, LeadStatus, StatusHistoryEntry, StatusHistoryRepository};
use crate::models::lead_request_status_history::{
    self, ActiveModel, Column, Entity as StatusHistoryEntity,
};

/// SeaORM-based implementation of StatusHistoryRepository
pub struct SeaOrmStatusHistoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmStatusHistoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(h: lead_request_status_history::Model) -> StatusHistoryEntry {
    StatusHistoryEntry {
        id: h.id,
        lead_request_id: h.lead_request_id,
        status: h.status,
        changed_by: h.changed_by,
        changed_at: h.changed_at,
    }
}

#[async_trait]
impl StatusHistoryRepository for SeaOrmStatusHistoryRepository {
    async fn find_by_lead_request(
        &self,
        lead_request_id: i32,
    ) -> Result<Vec<StatusHistoryEntry>, DomainError> {
        let rows = StatusHistoryEntity::find()
            .filter(Column::LeadRequestId.eq(lead_request_id))
            .order_by_desc(Column::ChangedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(to_domain).collect())
    }

    async fn append(
        &self,
        lead_request_id: i32,
        status: LeadStatus,
        changed_by: &str,
        changed_at: String,
    ) -> Result<StatusHistoryEntry, DomainError> {
        let row = ActiveModel {
            lead_request_id: Set(lead_request_id),
            status: Set(status.as_str().to_string()),
            changed_by: Set(changed_by.to_string()),
            changed_at: Set(changed_at),
            ..Default::default()
        };

        let result = row.insert(&self.db).await?;
        Ok(to_domain(result))
    }
}
