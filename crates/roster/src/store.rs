//! The managed-user roster store.

use chrono::NaiveDate;
use entities::{normalize_email, ManagedUser, User, UserRole, UserStatus};
use mock_api::Latency;
use tokio::sync::RwLock;

use crate::{seed::seed_roster, RosterError, RosterResult};

/// Fields for a roster entry to be created.
///
/// The id and creation date are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewRosterEntry {
    /// Email address, unique within the roster (case-insensitive).
    pub email: String,
    /// Display name.
    pub name: String,
    /// Assigned role.
    pub role: UserRole,
    /// Account standing.
    pub status: UserStatus,
    /// Avatar image reference.
    pub avatar: Option<String>,
    /// Most recent login date, if known.
    pub last_login: Option<NaiveDate>,
}

/// Per-field patch applied by [`RosterStore::update_user`].
///
/// `None` fields are left untouched; the merge is shallow.
#[derive(Debug, Clone, Default)]
pub struct RosterPatch {
    /// New email address.
    pub email: Option<String>,
    /// New display name.
    pub name: Option<String>,
    /// New role.
    pub role: Option<UserRole>,
    /// New account standing.
    pub status: Option<UserStatus>,
    /// New avatar reference.
    pub avatar: Option<String>,
    /// New most-recent-login date.
    pub last_login: Option<NaiveDate>,
}

struct RosterState {
    users: Vec<ManagedUser>,
    seeded: bool,
}

/// In-memory roster of managed users.
///
/// Seeded with a fixed list on the first fetch and mutated in place
/// thereafter. Operations pace themselves with the configured [`Latency`].
pub struct RosterStore {
    latency: Latency,
    state: RwLock<RosterState>,
}

impl RosterStore {
    /// Creates an empty, unseeded roster.
    pub fn new() -> Self {
        Self {
            latency: Latency::None,
            state: RwLock::new(RosterState {
                users: Vec::new(),
                seeded: false,
            }),
        }
    }

    /// Sets the simulated latency awaited by roster operations.
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// Returns the roster, seeding it with the fixed list on the first call.
    pub async fn fetch_users(&self) -> Vec<ManagedUser> {
        self.latency.wait().await;

        let mut state = self.state.write().await;
        if !state.seeded {
            state.users = seed_roster();
            state.seeded = true;
            tracing::debug!(count = state.users.len(), "Seeded the managed-user roster");
        }
        state.users.clone()
    }

    /// Adds a user, assigning a fresh id and today's creation date.
    ///
    /// Fails with [`RosterError::DuplicateEmail`] when the email already
    /// exists in the roster (case-insensitive).
    pub async fn add_user(&self, entry: NewRosterEntry) -> RosterResult<ManagedUser> {
        self.latency.wait().await;

        let mut state = self.state.write().await;
        let normalized = normalize_email(&entry.email);
        if state
            .users
            .iter()
            .any(|existing| normalize_email(&existing.user.email) == normalized)
        {
            return Err(RosterError::DuplicateEmail(entry.email));
        }

        let mut user = User::new(entry.email, entry.name);
        user.role = entry.role;
        user.avatar = entry.avatar;
        let managed = ManagedUser {
            user,
            status: entry.status,
            last_login: entry.last_login,
        };
        state.users.push(managed.clone());
        Ok(managed)
    }

    /// Applies a shallow field merge to the user with the given id.
    pub async fn update_user(&self, id: &str, patch: RosterPatch) -> RosterResult<ManagedUser> {
        self.latency.wait().await;

        let mut state = self.state.write().await;
        let managed = state
            .users
            .iter_mut()
            .find(|existing| existing.user.id == id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;

        if let Some(email) = patch.email {
            managed.user.email = email;
        }
        if let Some(name) = patch.name {
            managed.user.name = name;
        }
        if let Some(role) = patch.role {
            managed.user.role = role;
        }
        if let Some(status) = patch.status {
            managed.status = status;
        }
        if let Some(avatar) = patch.avatar {
            managed.user.avatar = Some(avatar);
        }
        if let Some(last_login) = patch.last_login {
            managed.last_login = Some(last_login);
        }
        Ok(managed.clone())
    }

    /// Removes the user with the given id.
    pub async fn delete_user(&self, id: &str) -> RosterResult<()> {
        self.latency.wait().await;

        let mut state = self.state.write().await;
        let before = state.users.len();
        state.users.retain(|existing| existing.user.id != id);
        if state.users.len() == before {
            return Err(RosterError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}
