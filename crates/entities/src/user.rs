//! User-related entity definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to an account.
///
/// Roles are inert labels on the client; nothing grants or denies
/// capabilities based on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full administrative account.
    Admin,
    /// Team manager account.
    Manager,
    /// Regular account.
    User,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::User
    }
}

impl UserRole {
    /// Checks if this role is the administrative one.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// An account identity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Opaque unique identifier.
    pub id: String,
    /// Email address. Unique case-insensitively at directory boundaries only.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Assigned role.
    pub role: UserRole,
    /// Avatar image reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Date the account was created.
    pub created_at: NaiveDate,
}

impl User {
    /// Creates a new user with a fresh id, the default role and today's date.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.into(),
            name: name.into(),
            role: UserRole::default(),
            avatar: None,
            created_at: chrono::Utc::now().date_naive(),
        }
    }

    /// Sets the role.
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Sets the avatar reference.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

/// Normalizes an email address for lookup and uniqueness comparison.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
