//! Admin Service - request type taxonomy and role assignment

use serde::Serialize;

use crate::domain::{DomainError, RequestType, RequestTypeInput, Role, SessionUser};
use crate::infrastructure::AppState;

/// User as shown on the role assignment screen
#[derive(Debug, Clone, Serialize)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub role: Option<String>,
}

fn require_admin(user: &SessionUser) -> Result<(), DomainError> {
    if user.is_admin() {
        Ok(())
    } else {
        tracing::warn!("Non-admin {} attempted an admin operation", user.email);
        Err(DomainError::access_denied())
    }
}

fn validate_request_type(input: &mut RequestTypeInput) -> Result<(), DomainError> {
    input.name = input.name.trim().to_string();
    if input.name.is_empty() {
        return Err(DomainError::Validation("Name is required".to_string()));
    }

    if let Some(fields) = &input.fields {
        if !fields.is_array() {
            return Err(DomainError::Validation(
                "Fields must be a JSON array".to_string(),
            ));
        }
    }

    Ok(())
}

pub async fn list_request_types(
    state: &AppState,
    user: &SessionUser,
) -> Result<Vec<RequestType>, DomainError> {
    require_admin(user)?;
    state.request_type_repo.find_all().await
}

pub async fn create_request_type(
    state: &AppState,
    user: &SessionUser,
    mut input: RequestTypeInput,
) -> Result<RequestType, DomainError> {
    require_admin(user)?;
    validate_request_type(&mut input)?;

    let created = state.request_type_repo.create(input).await?;
    tracing::info!("Request type {} '{}' created by {}", created.id, created.name, user.email);
    Ok(created)
}

pub async fn update_request_type(
    state: &AppState,
    user: &SessionUser,
    id: i32,
    mut input: RequestTypeInput,
) -> Result<RequestType, DomainError> {
    require_admin(user)?;
    validate_request_type(&mut input)?;

    let updated = state.request_type_repo.update(id, input).await?;
    tracing::info!("Request type {} updated by {}", id, user.email);
    Ok(updated)
}

pub async fn delete_request_type(
    state: &AppState,
    user: &SessionUser,
    id: i32,
) -> Result<(), DomainError> {
    require_admin(user)?;
    state.request_type_repo.delete(id).await?;
    tracing::info!("Request type {} deleted by {}", id, user.email);
    Ok(())
}

pub async fn list_users(
    state: &AppState,
    user: &SessionUser,
) -> Result<Vec<UserRow>, DomainError> {
    require_admin(user)?;

    Ok(state
        .user_repo
        .find_all()
        .await?
        .into_iter()
        .map(|u| UserRow {
            id: u.id,
            email: u.email,
            role: u.role,
        })
        .collect())
}

pub async fn update_user_role(
    state: &AppState,
    user: &SessionUser,
    target_id: &str,
    role: &str,
) -> Result<UserRow, DomainError> {
    require_admin(user)?;

    if target_id == user.id {
        return Err(DomainError::Validation(
            "You cannot change your own role".to_string(),
        ));
    }

    let role: Role = role.parse().map_err(DomainError::Validation)?;

    let updated = state.user_repo.update_role(target_id, role).await?;
    tracing::info!("{} assigned role {} to {}", user.email, role, updated.email);

    Ok(UserRow {
        id: updated.id,
        email: updated.email,
        role: updated.role,
    })
}
