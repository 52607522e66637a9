pub mod lead_request;
pub mod lead_request_status_history;
pub mod request_type;
pub mod user;
