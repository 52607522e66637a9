//! Repository implementations using SeaORM

pub mod lead_request_repository;
pub mod request_type_repository;
pub mod status_history_repository;
pub mod user_repository;

pub use lead_request_repository::SeaOrmLeadRequestRepository;
pub use request_type_repository::SeaOrmRequestTypeRepository;
pub use status_history_repository::SeaOrmStatusHistoryRepository;
pub use user_repository::SeaOrmUserRepository;
