//! Services Layer
//!
//! This module contains pure business logic extracted from HTTP handlers.
//! Every operation takes the caller's `SessionUser` and enforces its role.

pub mod admin_service;
pub mod auth_service;
pub mod lead_request_service;
