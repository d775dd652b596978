//! Wire types shared with the backend API, plus the auth error taxonomy.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authorization tier of a user account.
///
/// Closed set: any role string the backend sends outside these three fails
/// deserialization, so an unrecognized role can never grant access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Admin,
    Manager,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
            Role::Manager => "Manager",
        }
    }

    /// Strict parse of a backend role string. Unknown values yield `None`.
    pub fn from_str(value: &str) -> Option<Role> {
        match value {
            "User" => Some(Role::User),
            "Admin" => Some(Role::Admin),
            "Manager" => Some(Role::Manager),
            _ => None,
        }
    }
}

/// Canonical user record as returned by `GET /auth/me`.
///
/// The client only ever holds a cached copy; `role` can change server-side
/// and is re-resolved on every identity change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// External identity id assigned by the identity provider.
    pub uid: String,
    pub phone: String,
    pub role: Role,
    pub created_at: String,
}

/// Failures the auth gate can surface.
///
/// None of these are fatal: worst case the user stays on a public page or is
/// sent back to sign-in. Retry is always user-initiated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The identity provider rejected or lost the session.
    #[error("identity provider error: {0}")]
    Identity(String),
    /// The backend was unreachable or rejected the profile request.
    #[error("profile fetch failed: {0}")]
    ProfileFetch(String),
    /// First-time backend registration failed, or the identity has no
    /// backend record yet. Surfaced distinctly so the UI can offer
    /// registration instead of treating the user as anonymous.
    #[error("registration failed: {0}")]
    Registration(String),
}
