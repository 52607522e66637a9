use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::auth::signup,
        api::auth::login,
        api::auth::me,
        api::lead_request::list_lead_requests,
        api::lead_request::create_lead_request,
        api::lead_request::get_lead_request,
        api::lead_request::update_status,
        api::lead_request::form_options,
        api::request_type::list_request_types,
        api::request_type::create_request_type,
        api::request_type::update_request_type,
        api::request_type::delete_request_type,
        api::user::list_users,
        api::user::update_user_role,
    ),
    tags(
        (name = "lead_tracker", description = "Lead request tracking API")
    )
)]
pub struct ApiDoc;
