//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no SeaORM, no Axum).
//! Only trait definitions, domain types and error types.

pub mod access;
pub mod errors;
pub mod lead_request;
pub mod repositories;

pub use access::{Role, SessionUser};
pub use errors::DomainError;
pub use lead_request::{LEAD_AREA_TYPES, LeadStatus, NewLeadRequestForm, STATES};
pub use repositories::*;
