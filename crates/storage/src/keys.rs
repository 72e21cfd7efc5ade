//! Fixed storage slot names.

/// Keys identifying the durable state slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// Serialized session state.
    Session,
    /// Serialized display preferences.
    Preferences,
}

impl StorageKey {
    /// Returns the slot name this key is stored under.
    pub fn slot_name(&self) -> &'static str {
        match self {
            Self::Session => "admin-auth",
            Self::Preferences => "admin-theme-preferences",
        }
    }

    /// All known keys.
    pub fn all() -> &'static [StorageKey] {
        &[Self::Session, Self::Preferences]
    }
}
