//! The display preference store.

use std::sync::Arc;

use entities::{AccentColor, ContainerWidth, CornerRadius, Preferences, SidebarStyle, ThemeMode};
use storage::{StateStore, StorageKey, StorageResult, VersionedBlob};
use tokio::sync::RwLock;

/// Holds the caller's display preferences and persists every change.
pub struct PreferenceStore {
    storage: Arc<dyn StateStore>,
    prefs: RwLock<Preferences>,
}

impl PreferenceStore {
    /// Creates a store with default preferences.
    pub fn new(storage: Arc<dyn StateStore>) -> Self {
        Self {
            storage,
            prefs: RwLock::new(Preferences::default()),
        }
    }

    /// Creates a store, restoring any previously persisted preferences.
    ///
    /// A missing, unreadable or out-of-version blob restores as defaults.
    pub async fn restore(storage: Arc<dyn StateStore>) -> Self {
        let prefs = match Self::load_persisted(storage.as_ref()).await {
            Ok(Some(prefs)) => prefs,
            Ok(None) => Preferences::default(),
            Err(error) => {
                tracing::warn!(%error, "Failed to restore preferences, using defaults");
                Preferences::default()
            }
        };
        Self {
            storage,
            prefs: RwLock::new(prefs),
        }
    }

    async fn load_persisted(storage: &dyn StateStore) -> StorageResult<Option<Preferences>> {
        let Some(blob) = storage.get(StorageKey::Preferences).await? else {
            return Ok(None);
        };
        VersionedBlob::<Preferences>::decode(&blob)
    }

    /// A snapshot of the current preferences.
    pub async fn preferences(&self) -> Preferences {
        *self.prefs.read().await
    }

    /// Sets the light/dark scheme.
    pub async fn set_mode(&self, mode: ThemeMode) {
        self.mutate(|prefs| prefs.mode = mode).await;
    }

    /// Sets the accent color.
    pub async fn set_color(&self, color: AccentColor) {
        self.mutate(|prefs| prefs.color = color).await;
    }

    /// Sets the page container width.
    pub async fn set_container(&self, container: ContainerWidth) {
        self.mutate(|prefs| prefs.container = container).await;
    }

    /// Sets the sidebar presentation.
    pub async fn set_sidebar(&self, sidebar: SidebarStyle) {
        self.mutate(|prefs| prefs.sidebar = sidebar).await;
    }

    /// Sets the corner rounding.
    pub async fn set_corner_radius(&self, radius: CornerRadius) {
        self.mutate(|prefs| prefs.corner_radius = radius).await;
    }

    /// Restores every preference to its default.
    pub async fn reset_to_defaults(&self) {
        self.mutate(|prefs| *prefs = Preferences::default()).await;
    }

    async fn mutate(&self, apply: impl FnOnce(&mut Preferences)) {
        let mut prefs = self.prefs.write().await;
        apply(&mut prefs);
        self.persist(*prefs).await;
    }

    /// Fire-and-forget persistence of the full record.
    async fn persist(&self, prefs: Preferences) {
        let blob = match VersionedBlob::new(prefs).encode() {
            Ok(blob) => blob,
            Err(error) => {
                tracing::warn!(%error, "Failed to serialize preferences");
                return;
            }
        };
        if let Err(error) = self.storage.set(StorageKey::Preferences, &blob).await {
            tracing::warn!(%error, "Failed to persist preferences");
        }
    }
}

#[cfg(test)]
mod tests {
    use storage::MemoryStateStore;

    use super::*;

    #[tokio::test]
    async fn test_starts_with_defaults() {
        let store = PreferenceStore::new(Arc::new(MemoryStateStore::new()));

        assert_eq!(store.preferences().await, Preferences::default());
    }

    #[tokio::test]
    async fn test_setters_change_one_field() {
        let store = PreferenceStore::new(Arc::new(MemoryStateStore::new()));

        store.set_mode(ThemeMode::Dark).await;
        store.set_color(AccentColor::Green).await;

        let prefs = store.preferences().await;
        assert_eq!(prefs.mode, ThemeMode::Dark);
        assert_eq!(prefs.color, AccentColor::Green);
        assert_eq!(prefs.sidebar, SidebarStyle::Full);
    }

    #[tokio::test]
    async fn test_reset_to_defaults() {
        let store = PreferenceStore::new(Arc::new(MemoryStateStore::new()));
        store.set_container(ContainerWidth::Boxed).await;
        store.set_corner_radius(CornerRadius::Large).await;

        store.reset_to_defaults().await;

        assert_eq!(store.preferences().await, Preferences::default());
    }

    #[tokio::test]
    async fn test_preferences_survive_a_restart() {
        let slots = Arc::new(MemoryStateStore::new());

        let first = PreferenceStore::new(slots.clone());
        first.set_mode(ThemeMode::System).await;
        first.set_sidebar(SidebarStyle::Mini).await;
        drop(first);

        let second = PreferenceStore::restore(slots).await;
        let prefs = second.preferences().await;
        assert_eq!(prefs.mode, ThemeMode::System);
        assert_eq!(prefs.sidebar, SidebarStyle::Mini);
    }

    #[tokio::test]
    async fn test_restore_survives_a_corrupt_blob() {
        let slots = Arc::new(MemoryStateStore::new());
        slots.set(StorageKey::Preferences, "not json").await.unwrap();

        let store = PreferenceStore::restore(slots).await;

        assert_eq!(store.preferences().await, Preferences::default());
    }
}
