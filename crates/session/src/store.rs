//! The session store and its operations.

use std::sync::Arc;

use entities::User;
use mock_api::{mint_token, Latency};
use storage::{StateStore, StorageKey, StorageResult, VersionedBlob};
use tokio::sync::RwLock;

use crate::{
    CredentialDirectory, PersistedSession, Session, SessionError, SessionResult,
    MIN_PASSWORD_LEN,
};

struct SessionState {
    session: Session,
    /// Bumped on every applied mutation; in-flight operations that observe
    /// an older value are discarded when they land.
    generation: u64,
}

/// Holds the caller's authentication state and validates credentials against
/// an injected [`CredentialDirectory`].
///
/// Asynchronous operations pace themselves with the configured [`Latency`]
/// and persist every state change to the session storage slot. Persistence
/// is fire-and-forget: a failed write is logged and never fails the
/// operation.
pub struct SessionStore {
    directory: CredentialDirectory,
    storage: Arc<dyn StateStore>,
    latency: Latency,
    state: RwLock<SessionState>,
}

impl SessionStore {
    /// Creates a store with an empty session.
    pub fn new(directory: CredentialDirectory, storage: Arc<dyn StateStore>) -> Self {
        Self::with_session(directory, storage, Session::Anonymous)
    }

    /// Creates a store, restoring any previously persisted session.
    ///
    /// A missing, unreadable or out-of-version blob restores as anonymous.
    pub async fn restore(directory: CredentialDirectory, storage: Arc<dyn StateStore>) -> Self {
        let session = match Self::load_persisted(storage.as_ref()).await {
            Ok(Some(session)) => session,
            Ok(None) => Session::Anonymous,
            Err(error) => {
                tracing::warn!(%error, "Failed to restore persisted session, starting anonymous");
                Session::Anonymous
            }
        };
        Self::with_session(directory, storage, session)
    }

    /// Sets the simulated latency awaited by asynchronous operations.
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    fn with_session(
        directory: CredentialDirectory,
        storage: Arc<dyn StateStore>,
        session: Session,
    ) -> Self {
        Self {
            directory,
            storage,
            latency: Latency::None,
            state: RwLock::new(SessionState {
                session,
                generation: 0,
            }),
        }
    }

    async fn load_persisted(storage: &dyn StateStore) -> StorageResult<Option<Session>> {
        let Some(blob) = storage.get(StorageKey::Session).await? else {
            return Ok(None);
        };
        let Some(persisted) = VersionedBlob::<PersistedSession>::decode(&blob)? else {
            return Ok(None);
        };
        Ok(Some(persisted.into()))
    }

    /// A snapshot of the current session.
    pub async fn session(&self) -> Session {
        self.state.read().await.session.clone()
    }

    /// True when a user is currently logged in.
    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.session.is_authenticated()
    }

    /// The currently logged-in user, if any.
    pub async fn current_user(&self) -> Option<User> {
        self.state.read().await.session.user().cloned()
    }

    /// Validates credentials and establishes an authenticated session.
    ///
    /// The email is matched case-insensitively, the password exactly. An
    /// unknown email and a wrong password fail with the same
    /// [`SessionError::InvalidCredentials`] value, and the session is left
    /// untouched.
    pub async fn login(&self, email: &str, password: &str) -> SessionResult<User> {
        let generation = self.current_generation().await;
        self.latency.wait().await;

        let user = match self.directory.lookup(email) {
            Some(entry) if entry.password == password => entry.user.clone(),
            _ => return Err(SessionError::InvalidCredentials),
        };

        let token = mint_token();
        self.apply(
            generation,
            Session::Authenticated {
                user: user.clone(),
                token,
            },
        )
        .await?;
        tracing::debug!(email = %user.email, "Login succeeded");
        Ok(user)
    }

    /// Creates a new account and establishes an authenticated session.
    ///
    /// The new user gets a fresh id, the lowest-privilege role and today's
    /// creation date. The credential directory is fixed, so the account
    /// lives only as long as this session: once it ends, the email cannot
    /// log in again.
    pub async fn sign_up(&self, email: &str, password: &str, name: &str) -> SessionResult<User> {
        let generation = self.current_generation().await;
        self.latency.wait().await;

        if self.directory.contains(email) {
            return Err(SessionError::EmailAlreadyRegistered);
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(SessionError::WeakPassword);
        }

        let user = User::new(email, name);
        let token = mint_token();
        self.apply(
            generation,
            Session::Authenticated {
                user: user.clone(),
                token,
            },
        )
        .await?;
        tracing::debug!(email = %user.email, "Sign-up succeeded");
        Ok(user)
    }

    /// Clears the session unconditionally.
    ///
    /// Idempotent, takes no simulated latency, and bumps the store
    /// generation so any in-flight operation is discarded when it lands.
    pub async fn logout(&self) {
        let mut state = self.state.write().await;
        state.session = Session::Anonymous;
        state.generation += 1;
        self.persist(&state.session).await;
    }

    /// Checks that an account exists for a password reset.
    ///
    /// Success has no side effect: no reset token is issued and nothing is
    /// sent.
    pub async fn forgot_password(&self, email: &str) -> SessionResult<()> {
        self.latency.wait().await;

        if self.directory.contains(email) {
            Ok(())
        } else {
            Err(SessionError::AccountNotFound)
        }
    }

    async fn current_generation(&self) -> u64 {
        self.state.read().await.generation
    }

    /// Installs a new session unless the store generation moved since the
    /// operation began, in which case the completion is stale and discarded.
    async fn apply(&self, observed_generation: u64, session: Session) -> SessionResult<()> {
        let mut state = self.state.write().await;
        if state.generation != observed_generation {
            return Err(SessionError::Superseded);
        }
        state.session = session;
        state.generation += 1;
        self.persist(&state.session).await;
        Ok(())
    }

    /// Fire-and-forget persistence of the current session.
    async fn persist(&self, session: &Session) {
        let blob = match VersionedBlob::new(PersistedSession::from(session)).encode() {
            Ok(blob) => blob,
            Err(error) => {
                tracing::warn!(%error, "Failed to serialize session state");
                return;
            }
        };
        if let Err(error) = self.storage.set(StorageKey::Session, &blob).await {
            tracing::warn!(%error, "Failed to persist session state");
        }
    }
}

#[cfg(test)]
mod tests {
    use entities::UserRole;
    use storage::MemoryStateStore;

    use super::*;

    fn demo_store() -> SessionStore {
        SessionStore::new(CredentialDirectory::demo(), Arc::new(MemoryStateStore::new()))
    }

    #[tokio::test]
    async fn test_login_with_seeded_credentials() {
        let store = demo_store();

        let user = store.login("user@demo.com", "user123").await.unwrap();

        assert_eq!(user.role, UserRole::User);
        assert!(store.is_authenticated().await);
        let session = store.session().await;
        assert!(!session.token().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_login_is_case_insensitive_on_email() {
        let store = demo_store();

        let user = store.login("ADMIN@demo.com", "admin123").await.unwrap();

        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.email, "admin@demo.com");
    }

    #[tokio::test]
    async fn test_login_password_is_case_sensitive() {
        let store = demo_store();

        let result = store.login("admin@demo.com", "ADMIN123").await;

        assert_eq!(result.unwrap_err(), SessionError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_failed_login_leaves_session_unchanged() {
        let store = demo_store();
        store.login("admin@demo.com", "admin123").await.unwrap();
        let before = store.session().await;

        let result = store.login("admin@demo.com", "wrong").await;

        assert_eq!(result.unwrap_err(), SessionError::InvalidCredentials);
        assert_eq!(store.session().await, before);
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_are_indistinguishable() {
        let store = demo_store();

        let unknown = store.login("nobody@demo.com", "admin123").await.unwrap_err();
        let mismatch = store.login("admin@demo.com", "wrong").await.unwrap_err();

        assert_eq!(unknown, mismatch);
        assert_eq!(unknown.to_string(), mismatch.to_string());
        assert!(!store.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_sign_up_with_registered_email_fails() {
        let store = demo_store();

        // Rejected before the password is even considered
        let result = store.sign_up("ADMIN@demo.com", "x", "Someone").await;

        assert_eq!(result.unwrap_err(), SessionError::EmailAlreadyRegistered);
        assert!(!store.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_sign_up_with_fresh_email_succeeds() {
        let store = demo_store();

        let user = store.sign_up("new@demo.com", "longenough", "New User").await.unwrap();

        assert_eq!(user.role, UserRole::User);
        assert!(!user.id.is_empty());
        assert!(store.is_authenticated().await);
        assert_eq!(store.current_user().await.unwrap().email, "new@demo.com");
    }

    #[tokio::test]
    async fn test_sign_up_with_short_password_fails() {
        let store = demo_store();

        let result = store.sign_up("new@demo.com", "short", "New User").await;

        assert_eq!(result.unwrap_err(), SessionError::WeakPassword);
        assert_eq!(store.session().await, Session::Anonymous);
    }

    #[tokio::test]
    async fn test_signed_up_account_cannot_log_back_in() {
        let store = demo_store();
        store.sign_up("new@demo.com", "longenough", "New User").await.unwrap();
        store.logout().await;

        let result = store.login("new@demo.com", "longenough").await;

        assert_eq!(result.unwrap_err(), SessionError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_logout_clears_and_is_idempotent() {
        let store = demo_store();
        store.login("admin@demo.com", "admin123").await.unwrap();

        store.logout().await;
        assert_eq!(store.session().await, Session::Anonymous);

        store.logout().await;
        assert_eq!(store.session().await, Session::Anonymous);
    }

    #[tokio::test]
    async fn test_forgot_password() {
        let store = demo_store();

        store.forgot_password("manager@demo.com").await.unwrap();
        assert_eq!(store.session().await, Session::Anonymous);

        let result = store.forgot_password("nobody@demo.com").await;
        assert_eq!(result.unwrap_err(), SessionError::AccountNotFound);
    }

    #[tokio::test]
    async fn test_session_survives_a_restart() {
        let slots = Arc::new(MemoryStateStore::new());

        let first = SessionStore::new(CredentialDirectory::demo(), slots.clone());
        first.login("admin@demo.com", "admin123").await.unwrap();
        let before = first.session().await;
        drop(first);

        let second = SessionStore::restore(CredentialDirectory::demo(), slots).await;
        assert_eq!(second.session().await, before);
        assert!(second.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_restore_rejects_out_of_version_blob() {
        let slots = Arc::new(MemoryStateStore::new());
        slots
            .set(
                StorageKey::Session,
                "{\"version\":99,\"state\":{\"user\":null,\"token\":null,\"authenticated\":false}}",
            )
            .await
            .unwrap();

        let store = SessionStore::restore(CredentialDirectory::demo(), slots).await;

        assert_eq!(store.session().await, Session::Anonymous);
    }

    #[tokio::test]
    async fn test_restore_survives_a_corrupt_blob() {
        let slots = Arc::new(MemoryStateStore::new());
        slots.set(StorageKey::Session, "not json").await.unwrap();

        let store = SessionStore::restore(CredentialDirectory::demo(), slots).await;

        assert_eq!(store.session().await, Session::Anonymous);
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_landing_after_logout_is_discarded() {
        let store = Arc::new(
            SessionStore::new(CredentialDirectory::demo(), Arc::new(MemoryStateStore::new()))
                .with_latency(Latency::from_millis(100)),
        );

        let in_flight = {
            let store = store.clone();
            tokio::spawn(async move { store.login("admin@demo.com", "admin123").await })
        };
        // Let the login reach its simulated round-trip, then log out under it.
        tokio::task::yield_now().await;
        store.logout().await;

        let result = in_flight.await.unwrap();

        assert_eq!(result.unwrap_err(), SessionError::Superseded);
        assert_eq!(store.session().await, Session::Anonymous);
    }
}
