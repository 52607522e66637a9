//! Auth Service - credential checks and token issuance

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::domain::{CreateUserInput, DomainError, Role, SessionUser};
use crate::infrastructure::AppState;
use crate::infrastructure::auth::{create_jwt, hash_password, verify_password};

const MIN_PASSWORD_LEN: usize = 6;
const INVALID_CREDENTIALS: &str = "Invalid login credentials";

// Checked against when the email is unknown so both failure paths run argon2
static DUMMY_PASSWORD_HASH: Lazy<String> =
    Lazy::new(|| hash_password("not-a-real-password").unwrap_or_default());

/// Role given to every self-registered account
pub const SIGNUP_ROLE: Role = Role::IclOwner;

#[derive(Debug, Serialize)]
pub struct AuthSession {
    pub token: String,
    pub user: SessionUser,
}

fn issue(user: SessionUser) -> Result<AuthSession, DomainError> {
    let token = create_jwt(&user.id, &user.email).map_err(DomainError::Internal)?;
    Ok(AuthSession { token, user })
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub async fn signup(
    state: &AppState,
    email: &str,
    password: &str,
) -> Result<AuthSession, DomainError> {
    let email = normalize_email(email);

    if email.is_empty() || !email.contains('@') {
        return Err(DomainError::Validation(
            "Unable to validate email address: invalid format".to_string(),
        ));
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(DomainError::Validation(format!(
            "Password should be at least {} characters.",
            MIN_PASSWORD_LEN
        )));
    }

    if state.user_repo.find_by_email(&email).await?.is_some() {
        return Err(DomainError::Conflict("User already registered".to_string()));
    }

    let password_hash = hash_password(password).map_err(DomainError::Internal)?;
    let user = state
        .user_repo
        .create(CreateUserInput {
            email,
            password_hash,
            role: Some(SIGNUP_ROLE),
        })
        .await?;

    tracing::info!("New account registered: {}", user.email);
    issue(user.session())
}

pub async fn login(
    state: &AppState,
    email: &str,
    password: &str,
) -> Result<AuthSession, DomainError> {
    let email = normalize_email(email);
    tracing::info!("Login attempt for user: {}", email);

    let Some(user) = state.user_repo.find_by_email(&email).await? else {
        tracing::warn!("User not found: {}", email);
        let _ = verify_password(password, &DUMMY_PASSWORD_HASH);
        return Err(DomainError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    };

    match verify_password(password, &user.password_hash) {
        Ok(true) => issue(user.session()),
        _ => {
            tracing::warn!("Password verification failed for user: {}", email);
            Err(DomainError::Unauthorized(INVALID_CREDENTIALS.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::db::init_db;

    #[test]
    fn test_dummy_hash_is_a_real_argon2_hash() {
        assert!(DUMMY_PASSWORD_HASH.starts_with("$argon2"));
        assert_eq!(verify_password("hunter22", &DUMMY_PASSWORD_HASH), Ok(false));
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_fail_alike() {
        let db = init_db("sqlite::memory:").await.expect("Failed to init db");
        let state = AppState::new(db);
        signup(&state, "known@example.com", "right-password")
            .await
            .expect("signup");

        let unknown = login(&state, "unknown@example.com", "right-password")
            .await
            .unwrap_err();
        let wrong = login(&state, "known@example.com", "wrong-password")
            .await
            .unwrap_err();

        assert_eq!(unknown, wrong);
        assert_eq!(unknown.message(), INVALID_CREDENTIALS);
    }
}
