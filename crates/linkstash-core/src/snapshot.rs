use crate::error::StorageError;
use crate::mapping::UrlMapping;
use async_trait::async_trait;

/// A durable home for the full mapping collection.
///
/// The whole collection is read once at startup and rewritten wholesale
/// after every successful create.
#[async_trait]
pub trait SnapshotStore: Send + Sync + 'static {
    /// Loads the persisted snapshot.
    ///
    /// Returns `Ok(None)` if nothing has been persisted yet and
    /// `Err(StorageError::InvalidData)` if the snapshot cannot be parsed.
    async fn load(&self) -> Result<Option<Vec<UrlMapping>>, StorageError>;

    /// Replaces the persisted snapshot with `mappings`.
    async fn save(&self, mappings: &[UrlMapping]) -> Result<(), StorageError>;
}

/// Encodes mappings as the JSON array stored in a snapshot.
pub fn encode(mappings: &[UrlMapping]) -> Result<String, StorageError> {
    serde_json::to_string(mappings).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Decodes a snapshot's JSON array.
pub fn decode(raw: &str) -> Result<Vec<UrlMapping>, StorageError> {
    serde_json::from_str(raw).map_err(|e| StorageError::InvalidData(e.to_string()))
}
