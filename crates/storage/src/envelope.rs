//! Schema-versioned blob envelope.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::StorageResult;

/// Current schema version written to every durable blob.
pub const SCHEMA_VERSION: u32 = 1;

/// Envelope wrapping persisted state with its schema version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionedBlob<T> {
    /// Schema version the state was written under.
    pub version: u32,
    /// The persisted state.
    pub state: T,
}

impl<T: Serialize> VersionedBlob<T> {
    /// Wraps state under the current schema version.
    pub fn new(state: T) -> Self {
        Self {
            version: SCHEMA_VERSION,
            state,
        }
    }

    /// Serializes the envelope to JSON.
    pub fn encode(&self) -> StorageResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<T: DeserializeOwned> VersionedBlob<T> {
    /// Decodes a blob, returning `None` when the version is not current.
    ///
    /// An out-of-version blob is treated as absent state rather than an
    /// error, so a future field change never corrupts a restore.
    pub fn decode(blob: &str) -> StorageResult<Option<T>> {
        let envelope: VersionedBlob<T> = serde_json::from_str(blob)?;
        if envelope.version != SCHEMA_VERSION {
            return Ok(None);
        }
        Ok(Some(envelope.state))
    }
}
