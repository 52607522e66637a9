//! Roles and the access rules built on them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    IclOwner,
    Sidcorp,
    Admin,
}

impl Role {
    /// Every assignable role, in the order the admin screen lists them
    pub const ALL: [Role; 3] = [Role::IclOwner, Role::Sidcorp, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::IclOwner => "icl_owner",
            Role::Sidcorp => "sidcorp",
            Role::Admin => "admin",
        }
    }

    /// Reviewers see every lead request and move it through its lifecycle.
    pub fn is_reviewer(&self) -> bool {
        matches!(self, Role::Admin | Role::Sidcorp)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("Unknown role: {}", s))
    }
}

/// The authenticated user as resolved from the users table on each request.
///
/// A stored role string outside the fixed set is treated like no role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub role: Option<Role>,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    pub fn is_reviewer(&self) -> bool {
        self.role.is_some_and(|r| r.is_reviewer())
    }

    pub fn can_view_lead_request(&self, owner_id: &str) -> bool {
        self.is_reviewer() || self.id == owner_id
    }

    pub fn can_update_status(&self) -> bool {
        self.is_reviewer()
    }
}
