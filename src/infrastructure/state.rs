//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{
    LeadRequestRepository, RequestTypeRepository, StatusHistoryRepository, UserRepository,
};
use crate::infrastructure::{
    SeaOrmLeadRequestRepository, SeaOrmRequestTypeRepository, SeaOrmStatusHistoryRepository,
    SeaOrmUserRepository,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// User repository
    pub user_repo: Arc<dyn UserRepository>,
    /// Request type repository
    pub request_type_repo: Arc<dyn RequestTypeRepository>,
    /// Lead request repository
    pub lead_request_repo: Arc<dyn LeadRequestRepository>,
    /// Status history repository
    pub status_history_repo: Arc<dyn StatusHistoryRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(SeaOrmUserRepository::new(db.clone())),
            request_type_repo: Arc::new(SeaOrmRequestTypeRepository::new(db.clone())),
            lead_request_repo: Arc::new(SeaOrmLeadRequestRepository::new(db.clone())),
            status_history_repo: Arc::new(SeaOrmStatusHistoryRepository::new(db)),
        }
    }
}
