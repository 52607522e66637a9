//! SeaORM implementation of RequestTypeRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::{DomainError, RequestType, RequestTypeInput, RequestTypeRepository};
use crate::models::request_type::{self, ActiveModel, Column, Entity as RequestTypeEntity};

/// SeaORM-based implementation of RequestTypeRepository
pub struct SeaOrmRequestTypeRepository {
    db: DatabaseConnection,
}

impl SeaOrmRequestTypeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(rt: request_type::Model) -> RequestType {
    // Malformed stored fields read as an empty list
    let fields = serde_json::from_str(&rt.fields).unwrap_or_else(|_| serde_json::json!([]));

    RequestType {
        id: rt.id,
        name: rt.name,
        description: rt.description,
        fields,
        created_at: rt.created_at,
        updated_at: rt.updated_at,
    }
}

fn fields_text(fields: Option<serde_json::Value>) -> String {
    fields
        .unwrap_or_else(|| serde_json::json!([]))
        .to_string()
}

#[async_trait]
impl RequestTypeRepository for SeaOrmRequestTypeRepository {
    async fn find_all(&self) -> Result<Vec<RequestType>, DomainError> {
        let types = RequestTypeEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(types.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<RequestType>, DomainError> {
        let rt = RequestTypeEntity::find_by_id(id).one(&self.db).await?;
        Ok(rt.map(to_domain))
    }

    async fn create(&self, input: RequestTypeInput) -> Result<RequestType, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let rt = ActiveModel {
            name: Set(input.name),
            description: Set(input.description.unwrap_or_default()),
            fields: Set(fields_text(input.fields)),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = rt.insert(&self.db).await?;
        Ok(to_domain(result))
    }

    async fn update(&self, id: i32, input: RequestTypeInput) -> Result<RequestType, DomainError> {
        let existing = RequestTypeEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::NotFound("Request type not found".to_string()))?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(input.name);
        if let Some(description) = input.description {
            active.description = Set(description);
        }
        if input.fields.is_some() {
            active.fields = Set(fields_text(input.fields));
        }
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        let updated = active.update(&self.db).await?;
        Ok(to_domain(updated))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = RequestTypeEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound("Request type not found".to_string()));
        }

        Ok(())
    }
}
