//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};
use uuid::Uuid;

use crate::domain::{CreateUserInput, DomainError, Role, User, UserRepository};
use crate::models::user::{self, ActiveModel, Column, Entity as UserEntity};

/// SeaORM-based implementation of UserRepository
pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(u: user::Model) -> User {
    User {
        id: u.id,
        email: u.email,
        password_hash: u.password_hash,
        role: u.role,
        created_at: u.created_at,
        updated_at: u.updated_at,
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = UserEntity::find()
            .order_by_asc(Column::Email)
            .all(&self.db)
            .await?;

        Ok(users.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError> {
        let user = UserEntity::find_by_id(id).one(&self.db).await?;
        Ok(user.map(to_domain))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let user = UserEntity::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(user.map(to_domain))
    }

    async fn find_by_ids(&self, ids: Vec<String>) -> Result<Vec<User>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = UserEntity::find()
            .filter(Column::Id.is_in(ids))
            .all(&self.db)
            .await?;

        Ok(users.into_iter().map(to_domain).collect())
    }

    async fn create(&self, input: CreateUserInput) -> Result<User, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let user = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            email: Set(input.email),
            password_hash: Set(input.password_hash),
            role: Set(input.role.map(|r| r.as_str().to_string())),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        };

        let result = user.insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                DomainError::Conflict("User already registered".to_string())
            }
            _ => DomainError::from(e),
        })?;

        Ok(to_domain(result))
    }

    async fn update_role(&self, id: &str, role: Role) -> Result<User, DomainError> {
        let existing = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::NotFound("User not found".to_string()))?;

        let mut active: ActiveModel = existing.into();
        active.role = Set(Some(role.as_str().to_string()));
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        let updated = active.update(&self.db).await?;
        Ok(to_domain(updated))
    }
}
