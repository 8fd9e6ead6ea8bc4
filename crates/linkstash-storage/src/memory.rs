use async_trait::async_trait;
use linkstash_core::snapshot::{decode, encode};
use linkstash_core::{SnapshotStore, StorageError, UrlMapping};
use parking_lot::RwLock;
use std::sync::Arc;

/// In-memory snapshot holding the serialized JSON array.
///
/// Clones share the same underlying slot, so a clone handed to a freshly
/// opened store behaves like the same storage after a process restart.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshot {
    raw: Arc<RwLock<Option<String>>>,
}

impl InMemorySnapshot {
    /// Creates an empty snapshot slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-filled with raw (possibly corrupt) content.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Arc::new(RwLock::new(Some(raw.into()))),
        }
    }

    /// Returns the currently stored raw content.
    pub fn raw(&self) -> Option<String> {
        self.raw.read().clone()
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshot {
    async fn load(&self) -> Result<Option<Vec<UrlMapping>>, StorageError> {
        match self.raw.read().as_deref() {
            Some(raw) => decode(raw).map(Some),
            None => Ok(None),
        }
    }

    async fn save(&self, mappings: &[UrlMapping]) -> Result<(), StorageError> {
        let encoded = encode(mappings)?;
        *self.raw.write() = Some(encoded);
        Ok(())
    }
}
