//! State slot trait and implementations.

use std::{
    collections::HashMap,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{StorageKey, StorageResult};

/// Trait for durable state slot access.
///
/// A slot holds one serialized blob per [`StorageKey`]. Writes replace the
/// whole blob; reads return the last written value.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Reads the blob stored under a key.
    async fn get(&self, key: StorageKey) -> StorageResult<Option<String>>;

    /// Replaces the blob stored under a key.
    async fn set(&self, key: StorageKey, value: &str) -> StorageResult<()>;

    /// Removes the blob stored under a key.
    async fn delete(&self, key: StorageKey) -> StorageResult<()>;
}

/// In-memory state store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    slots: Arc<RwLock<HashMap<StorageKey, String>>>,
}

impl MemoryStateStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn get(&self, key: StorageKey) -> StorageResult<Option<String>> {
        let slots = self.slots.read().await;
        Ok(slots.get(&key).cloned())
    }

    async fn set(&self, key: StorageKey, value: &str) -> StorageResult<()> {
        let mut slots = self.slots.write().await;
        slots.insert(key, value.to_string());
        Ok(())
    }

    async fn delete(&self, key: StorageKey) -> StorageResult<()> {
        let mut slots = self.slots.write().await;
        slots.remove(&key);
        Ok(())
    }
}

/// File-backed state store writing one JSON file per slot.
///
/// The single-writer model makes plain whole-file replacement sufficient; no
/// locking or fsync step is taken.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    root: PathBuf,
}

impl FileStateStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory is created lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory holding the slot files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, key: StorageKey) -> PathBuf {
        self.root.join(format!("{}.json", key.slot_name()))
    }
}

#[async_trait]
impl StateStore for FileStateStore {
    async fn get(&self, key: StorageKey) -> StorageResult<Option<String>> {
        match std::fs::read_to_string(self.slot_path(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: StorageKey, value: &str) -> StorageResult<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.slot_path(key), value)?;
        Ok(())
    }

    async fn delete(&self, key: StorageKey) -> StorageResult<()> {
        match std::fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()), // Already gone
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_basic_operations() {
        let store = MemoryStateStore::new();

        store.set(StorageKey::Session, "blob").await.unwrap();
        let value = store.get(StorageKey::Session).await.unwrap();
        assert_eq!(value, Some("blob".to_string()));

        // Slots are independent
        assert!(store.get(StorageKey::Preferences).await.unwrap().is_none());

        store.delete(StorageKey::Session).await.unwrap();
        assert!(store.get(StorageKey::Session).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_store_overwrites() {
        let store = MemoryStateStore::new();

        store.set(StorageKey::Preferences, "first").await.unwrap();
        store.set(StorageKey::Preferences, "second").await.unwrap();

        let value = store.get(StorageKey::Preferences).await.unwrap();
        assert_eq!(value, Some("second".to_string()));
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path());

        assert!(store.get(StorageKey::Session).await.unwrap().is_none());

        store.set(StorageKey::Session, "{\"version\":1}").await.unwrap();

        // A second store over the same directory sees the write
        let reopened = FileStateStore::new(dir.path());
        let value = reopened.get(StorageKey::Session).await.unwrap();
        assert_eq!(value, Some("{\"version\":1}".to_string()));

        store.delete(StorageKey::Session).await.unwrap();
        assert!(reopened.get(StorageKey::Session).await.unwrap().is_none());

        // Deleting a missing slot is fine
        store.delete(StorageKey::Session).await.unwrap();
    }
}
