use crate::domain::{CreateUserInput, DomainError, RequestTypeInput, Role};
use crate::infrastructure::AppState;
use crate::infrastructure::auth::hash_password;

const DEMO_USERS: [(&str, &str, Role); 3] = [
    ("admin@example.com", "admin-demo", Role::Admin),
    ("reviewer@example.com", "reviewer-demo", Role::Sidcorp),
    ("owner@example.com", "owner-demo", Role::IclOwner),
];

const DEMO_REQUEST_TYPES: [(&str, &str); 3] = [
    ("Fiber", "Fiber availability leads"),
    ("Wireless", "Wireless and 5G home internet leads"),
    ("Business", "Small business service leads"),
];

/// Seeds demo users and request types. Existing rows are left alone.
pub async fn seed_demo_data(state: &AppState) -> Result<(), DomainError> {
    for (email, password, role) in DEMO_USERS {
        if state.user_repo.find_by_email(email).await?.is_some() {
            continue;
        }

        let password_hash = hash_password(password).map_err(DomainError::Internal)?;
        state
            .user_repo
            .create(CreateUserInput {
                email: email.to_string(),
                password_hash,
                role: Some(role),
            })
            .await?;
        tracing::info!("Seeded demo user {} ({})", email, role);
    }

    if state.request_type_repo.find_all().await?.is_empty() {
        for (name, description) in DEMO_REQUEST_TYPES {
            state
                .request_type_repo
                .create(RequestTypeInput {
                    name: name.to_string(),
                    description: Some(description.to_string()),
                    fields: None,
                })
                .await?;
        }
        tracing::info!("Seeded {} request types", DEMO_REQUEST_TYPES.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::db::init_db;

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let db = init_db("sqlite::memory:").await.expect("Failed to init db");
        let state = AppState::new(db);

        seed_demo_data(&state).await.expect("First seed failed");
        seed_demo_data(&state).await.expect("Second seed failed");

        assert_eq!(state.user_repo.find_all().await.unwrap().len(), 3);
        assert_eq!(state.request_type_repo.find_all().await.unwrap().len(), 3);

        let admin = state
            .user_repo
            .find_by_email("admin@example.com")
            .await
            .unwrap()
            .expect("admin seeded");
        assert!(admin.session().is_admin());
    }
}
