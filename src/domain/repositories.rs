//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{DomainError, LeadStatus, NewLeadRequestForm, Role, SessionUser};

/// User row, including the credential hash
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl User {
    pub fn session(&self) -> SessionUser {
        SessionUser {
            id: self.id.clone(),
            email: self.email.clone(),
            role: self.role.as_deref().and_then(|r| r.parse().ok()),
        }
    }
}

/// Input for creating a user
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub email: String,
    pub password_hash: String,
    pub role: Option<Role>,
}

/// Repository trait for User entity
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find all users
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by email (exact match)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find the users whose IDs are listed
    async fn find_by_ids(&self, ids: Vec<String>) -> Result<Vec<User>, DomainError>;

    /// Create a new user
    async fn create(&self, input: CreateUserInput) -> Result<User, DomainError>;

    /// Replace a user's role
    async fn update_role(&self, id: &str, role: Role) -> Result<User, DomainError>;
}

/// Request type data for API responses
#[derive(Debug, Clone, Serialize)]
pub struct RequestType {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub fields: serde_json::Value,
    pub created_at: String,
    pub updated_at: String,
}

/// Input for creating or updating a request type
#[derive(Debug, Clone, Deserialize)]
pub struct RequestTypeInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Option<serde_json::Value>,
}

/// Repository trait for RequestType entity
#[async_trait]
pub trait RequestTypeRepository: Send + Sync {
    /// Find all request types ordered by ID
    async fn find_all(&self) -> Result<Vec<RequestType>, DomainError>;

    /// Find a request type by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<RequestType>, DomainError>;

    /// Create a new request type
    async fn create(&self, input: RequestTypeInput) -> Result<RequestType, DomainError>;

    /// Update a request type
    async fn update(&self, id: i32, input: RequestTypeInput) -> Result<RequestType, DomainError>;

    /// Delete a request type
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Lead request data for API responses
#[derive(Debug, Clone, Serialize)]
pub struct LeadRequest {
    pub id: i32,
    pub user_id: String,
    pub request_type_id: Option<i32>,
    pub lead_request_type: String,
    pub lead_area_type: String,
    pub dealer_code: Option<String>,
    pub state: String,
    pub lead_area_requested: String,
    pub date_needed_by: String,
    pub notes: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Input for creating a lead request
#[derive(Debug, Clone)]
pub struct CreateLeadRequestInput {
    pub user_id: String,
    pub form: NewLeadRequestForm,
    pub status: LeadStatus,
}

/// Filter criteria for lead request queries
#[derive(Debug, Default, Clone)]
pub struct LeadRequestFilter {
    pub owner_id: Option<String>,
}

/// Repository trait for LeadRequest entity
#[async_trait]
pub trait LeadRequestRepository: Send + Sync {
    /// Find lead requests matching the filter, newest first
    async fn find_all(&self, filter: LeadRequestFilter) -> Result<Vec<LeadRequest>, DomainError>;

    /// Find a lead request by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<LeadRequest>, DomainError>;

    /// Create a new lead request
    async fn create(&self, input: CreateLeadRequestInput) -> Result<LeadRequest, DomainError>;

    /// Set the status and bump `updated_at`
    async fn update_status(
        &self,
        id: i32,
        status: LeadStatus,
        updated_at: String,
    ) -> Result<LeadRequest, DomainError>;
}

/// Status history row
#[derive(Debug, Clone, Serialize)]
pub struct StatusHistoryEntry {
    pub id: i32,
    pub lead_request_id: i32,
    pub status: String,
    pub changed_by: String,
    pub changed_at: String,
}

/// Repository trait for the status history log
#[async_trait]
pub trait StatusHistoryRepository: Send + Sync {
    /// History of one lead request, newest first
    async fn find_by_lead_request(
        &self,
        lead_request_id: i32,
    ) -> Result<Vec<StatusHistoryEntry>, DomainError>;

    /// Append a history row
    async fn append(
        &self,
        lead_request_id: i32,
        status: LeadStatus,
        changed_by: &str,
        changed_at: String,
    ) -> Result<StatusHistoryEntry, DomainError>;
}
