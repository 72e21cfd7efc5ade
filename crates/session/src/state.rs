//! Session state.

use entities::User;
use serde::{Deserialize, Serialize};

/// The authentication state of the active caller.
///
/// A user and token are only ever present together; the variant itself is
/// the authenticated flag, so no inconsistent combination can be
/// represented.
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    /// No one is logged in.
    Anonymous,
    /// A user is logged in with an access token.
    Authenticated {
        /// The logged-in account.
        user: User,
        /// The minted access token.
        token: String,
    },
}

impl Default for Session {
    fn default() -> Self {
        Self::Anonymous
    }
}

impl Session {
    /// True when a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// The logged-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated { user, .. } => Some(user),
            Self::Anonymous => None,
        }
    }

    /// The access token, if any.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { token, .. } => Some(token),
            Self::Anonymous => None,
        }
    }
}

/// Wire shape of a persisted session.
///
/// Field-for-field the historical blob layout (`user` / `token` /
/// `authenticated`); consistency is re-checked when converting back, so a
/// blob with a user but no token restores as anonymous.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedSession {
    /// The persisted user, if one was logged in.
    pub user: Option<User>,
    /// The persisted token, if one was logged in.
    pub token: Option<String>,
    /// Whether the session was authenticated.
    pub authenticated: bool,
}

impl From<&Session> for PersistedSession {
    fn from(session: &Session) -> Self {
        match session {
            Session::Anonymous => Self {
                user: None,
                token: None,
                authenticated: false,
            },
            Session::Authenticated { user, token } => Self {
                user: Some(user.clone()),
                token: Some(token.clone()),
                authenticated: true,
            },
        }
    }
}

impl From<PersistedSession> for Session {
    fn from(persisted: PersistedSession) -> Self {
        match persisted {
            PersistedSession {
                user: Some(user),
                token: Some(token),
                authenticated: true,
            } => Self::Authenticated { user, token },
            _ => Self::Anonymous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_accessors() {
        let session = Session::default();

        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_authenticated_accessors() {
        let session = Session::Authenticated {
            user: User::new("test@example.com", "Test User"),
            token: "jwt_1_abc".to_string(),
        };

        assert!(session.is_authenticated());
        assert_eq!(session.user().map(|u| u.email.as_str()), Some("test@example.com"));
        assert_eq!(session.token(), Some("jwt_1_abc"));
    }

    #[test]
    fn test_persisted_round_trip() {
        let session = Session::Authenticated {
            user: User::new("test@example.com", "Test User"),
            token: "jwt_1_abc".to_string(),
        };

        let restored = Session::from(PersistedSession::from(&session));
        assert_eq!(restored, session);
    }

    #[test]
    fn test_inconsistent_blob_restores_anonymous() {
        // Token missing despite the flag: never reinstate half a session.
        let persisted = PersistedSession {
            user: Some(User::new("test@example.com", "Test User")),
            token: None,
            authenticated: true,
        };

        assert_eq!(Session::from(persisted), Session::Anonymous);
    }
}
