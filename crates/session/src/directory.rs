//! The mock credential directory.

use std::collections::HashMap;

use chrono::NaiveDate;
use entities::{normalize_email, User, UserRole};

/// A password paired with the account it unlocks.
///
/// Mock data only; passwords are plaintext and nothing is hashed.
#[derive(Debug, Clone)]
pub struct CredentialEntry {
    /// The password accepted for this account.
    pub password: String,
    /// The account record returned on a successful login.
    pub user: User,
}

/// Read-only lookup table of known email/password/user triples.
///
/// Keyed by normalized (lowercase) email. Entries are fixed for the lifetime
/// of the directory: sign-up never inserts here, so an account created at
/// runtime cannot log in again once its session ends.
#[derive(Debug, Clone, Default)]
pub struct CredentialDirectory {
    entries: HashMap<String, CredentialEntry>,
}

impl CredentialDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, keyed by the user's normalized email.
    pub fn with_entry(mut self, password: impl Into<String>, user: User) -> Self {
        self.entries.insert(
            normalize_email(&user.email),
            CredentialEntry {
                password: password.into(),
                user,
            },
        );
        self
    }

    /// The demo directory: three fixed accounts, one per role.
    pub fn demo() -> Self {
        Self::new()
            .with_entry(
                "admin123",
                demo_user("1", "admin@demo.com", "Admin User", UserRole::Admin, 2024, 1, 1),
            )
            .with_entry(
                "manager123",
                demo_user("2", "manager@demo.com", "Manager User", UserRole::Manager, 2024, 1, 15),
            )
            .with_entry(
                "user123",
                demo_user("3", "user@demo.com", "Regular User", UserRole::User, 2024, 2, 1),
            )
    }

    /// Looks up an entry by email, normalizing first.
    pub fn lookup(&self, email: &str) -> Option<&CredentialEntry> {
        self.entries.get(&normalize_email(email))
    }

    /// Checks whether an email is registered.
    pub fn contains(&self, email: &str) -> bool {
        self.entries.contains_key(&normalize_email(email))
    }

    /// Number of registered accounts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the directory has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn demo_user(
    id: &str,
    email: &str,
    name: &str,
    role: UserRole,
    year: i32,
    month: u32,
    day: u32,
) -> User {
    User {
        id: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        role,
        avatar: None,
        created_at: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
    }
}
