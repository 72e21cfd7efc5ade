//! Managed-roster entity definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::User;

/// Account standing of a managed user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Account is in good standing.
    Active,
    /// Account has been disabled.
    Inactive,
    /// Account is awaiting activation.
    Pending,
}

impl Default for UserStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// A user as tracked by the management roster.
///
/// The roster lives in its own identity space; a `ManagedUser` has no
/// relation to whoever is currently logged in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedUser {
    /// The underlying account record.
    #[serde(flatten)]
    pub user: User,
    /// Account standing.
    pub status: UserStatus,
    /// Most recent login date, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<NaiveDate>,
}

impl ManagedUser {
    /// Creates a roster record with the default status and no login history.
    pub fn new(user: User) -> Self {
        Self {
            user,
            status: UserStatus::default(),
            last_login: None,
        }
    }

    /// Sets the account standing.
    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the most recent login date.
    pub fn with_last_login(mut self, date: NaiveDate) -> Self {
        self.last_login = Some(date);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_managed_user_defaults() {
        let managed = ManagedUser::new(User::new("test@example.com", "Test User"));

        assert_eq!(managed.status, UserStatus::Active);
        assert!(managed.last_login.is_none());
    }

    #[test]
    fn test_managed_user_flattens_base_fields() {
        let managed = ManagedUser::new(User::new("test@example.com", "Test User"))
            .with_status(UserStatus::Pending);

        let json = serde_json::to_value(&managed).unwrap();
        assert_eq!(json["email"], "test@example.com");
        assert_eq!(json["status"], "pending");
    }
}
