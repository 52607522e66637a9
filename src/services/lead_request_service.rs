//! Lead Request Service - submission, visibility and the status lifecycle

use serde::Serialize;
use std::collections::HashMap;

use crate::domain::{
    CreateLeadRequestInput, DomainError, LEAD_AREA_TYPES, LeadRequest, LeadRequestFilter,
    LeadStatus, NewLeadRequestForm, STATES, SessionUser, StatusHistoryEntry,
};
use crate::infrastructure::AppState;

const UNKNOWN_TYPE: &str = "Unknown";

/// Lead request row as listed, with its request type resolved
#[derive(Debug, Clone, Serialize)]
pub struct LeadRequestSummary {
    #[serde(flatten)]
    pub lead_request: LeadRequest,
    pub request_type_name: String,
}

/// History row with the actor's email when the actor still exists
#[derive(Debug, Clone, Serialize)]
pub struct StatusHistoryView {
    #[serde(flatten)]
    pub entry: StatusHistoryEntry,
    pub user_email: Option<String>,
    /// Email, or the raw actor id when the user row is gone
    pub changed_by_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeadRequestDetail {
    pub lead_request: LeadRequest,
    pub request_type_name: String,
    pub can_update_status: bool,
    pub status_options: Vec<LeadStatus>,
    pub history: Vec<StatusHistoryView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestTypeOption {
    pub id: i32,
    pub name: String,
}

/// Everything the new-request form needs to render its selects
#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub request_types: Vec<RequestTypeOption>,
    pub lead_area_types: Vec<&'static str>,
    pub states: Vec<&'static str>,
    pub statuses: Vec<LeadStatus>,
}

/// Outcome of a status change
#[derive(Debug, Clone, Serialize)]
pub struct StatusChange {
    pub lead_request: LeadRequest,
    pub history_entry: StatusHistoryEntry,
}

async fn request_type_names(state: &AppState) -> Result<HashMap<i32, String>, DomainError> {
    Ok(state
        .request_type_repo
        .find_all()
        .await?
        .into_iter()
        .map(|rt| (rt.id, rt.name))
        .collect())
}

fn type_name(names: &HashMap<i32, String>, id: Option<i32>) -> String {
    id.and_then(|id| names.get(&id).cloned())
        .unwrap_or_else(|| UNKNOWN_TYPE.to_string())
}

/// Reviewers see every request, everyone else only their own. Newest first.
pub async fn list_lead_requests(
    state: &AppState,
    user: &SessionUser,
) -> Result<Vec<LeadRequestSummary>, DomainError> {
    let filter = if user.is_reviewer() {
        LeadRequestFilter::default()
    } else {
        LeadRequestFilter {
            owner_id: Some(user.id.clone()),
        }
    };

    let requests = state.lead_request_repo.find_all(filter).await?;
    let names = request_type_names(state).await?;

    Ok(requests
        .into_iter()
        .map(|lead_request| LeadRequestSummary {
            request_type_name: type_name(&names, lead_request.request_type_id),
            lead_request,
        })
        .collect())
}

pub async fn form_options(state: &AppState) -> Result<FormOptions, DomainError> {
    let request_types = state
        .request_type_repo
        .find_all()
        .await?
        .into_iter()
        .map(|rt| RequestTypeOption {
            id: rt.id,
            name: rt.name,
        })
        .collect();

    Ok(FormOptions {
        request_types,
        lead_area_types: LEAD_AREA_TYPES.to_vec(),
        states: STATES.to_vec(),
        statuses: LeadStatus::ALL.to_vec(),
    })
}

/// Submit a new request owned by the caller. It always starts as a draft.
pub async fn create_lead_request(
    state: &AppState,
    user: &SessionUser,
    mut form: NewLeadRequestForm,
) -> Result<LeadRequest, DomainError> {
    form.validate()?;

    let request_types = state.request_type_repo.find_all().await?;

    if !request_types
        .iter()
        .any(|rt| rt.name == form.lead_request_type)
    {
        return Err(DomainError::Validation(format!(
            "Unknown lead request type: {}",
            form.lead_request_type
        )));
    }

    if let Some(type_id) = form.request_type_id {
        if !request_types.iter().any(|rt| rt.id == type_id) {
            return Err(DomainError::Validation(format!(
                "Unknown request type: {}",
                type_id
            )));
        }
    }

    let created = state
        .lead_request_repo
        .create(CreateLeadRequestInput {
            user_id: user.id.clone(),
            form,
            status: LeadStatus::Draft,
        })
        .await?;

    tracing::info!(
        "Lead request {} submitted by {} ({} / {})",
        created.id,
        user.email,
        created.lead_request_type,
        created.state
    );

    Ok(created)
}

async fn find_visible(
    state: &AppState,
    user: &SessionUser,
    id: i32,
) -> Result<LeadRequest, DomainError> {
    let lead_request = state
        .lead_request_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::NotFound("Request not found".to_string()))?;

    if !user.can_view_lead_request(&lead_request.user_id) {
        tracing::warn!("User {} denied access to lead request {}", user.email, id);
        return Err(DomainError::access_denied());
    }

    Ok(lead_request)
}

pub async fn get_lead_request_detail(
    state: &AppState,
    user: &SessionUser,
    id: i32,
) -> Result<LeadRequestDetail, DomainError> {
    let lead_request = find_visible(state, user, id).await?;

    let request_type_name = match lead_request.request_type_id {
        Some(type_id) => state
            .request_type_repo
            .find_by_id(type_id)
            .await?
            .map(|rt| rt.name)
            .unwrap_or_else(|| UNKNOWN_TYPE.to_string()),
        None => UNKNOWN_TYPE.to_string(),
    };

    let entries = state.status_history_repo.find_by_lead_request(id).await?;

    let mut actor_ids: Vec<String> = entries.iter().map(|e| e.changed_by.clone()).collect();
    actor_ids.sort();
    actor_ids.dedup();

    let emails: HashMap<String, String> = state
        .user_repo
        .find_by_ids(actor_ids)
        .await?
        .into_iter()
        .map(|u| (u.id, u.email))
        .collect();

    let history = entries
        .into_iter()
        .map(|entry| {
            let user_email = emails.get(&entry.changed_by).cloned();
            StatusHistoryView {
                changed_by_label: user_email.clone().unwrap_or_else(|| entry.changed_by.clone()),
                user_email,
                entry,
            }
        })
        .collect();

    Ok(LeadRequestDetail {
        lead_request,
        request_type_name,
        can_update_status: user.can_update_status(),
        status_options: LeadStatus::ALL.to_vec(),
        history,
    })
}

/// Move a request to another status and append the matching history row.
///
/// The two writes are sequential and independent: when the history append
/// fails, its error is returned and the status change stays applied.
pub async fn update_status(
    state: &AppState,
    user: &SessionUser,
    id: i32,
    new_status: &str,
) -> Result<StatusChange, DomainError> {
    if !user.can_update_status() {
        tracing::warn!("User {} tried to change status of request {}", user.email, id);
        return Err(DomainError::access_denied());
    }

    let status: LeadStatus = new_status.parse()?;

    let current = state
        .lead_request_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::NotFound("Request not found".to_string()))?;

    if current.status == status.as_str() {
        return Err(DomainError::Validation(format!(
            "Request is already {}",
            status
        )));
    }

    let now = chrono::Utc::now().to_rfc3339();
    let lead_request = state
        .lead_request_repo
        .update_status(id, status, now.clone())
        .await?;

    let history_entry = match state
        .status_history_repo
        .append(id, status, &user.id, now)
        .await
    {
        Ok(entry) => entry,
        Err(e) => {
            tracing::error!(
                "Status of request {} changed to {} but history append failed: {}",
                id,
                status,
                e
            );
            return Err(e);
        }
    };

    tracing::info!(
        "Lead request {} moved from {} to {} by {}",
        id,
        current.status,
        status,
        user.email
    );

    Ok(StatusChange {
        lead_request,
        history_entry,
    })
}
