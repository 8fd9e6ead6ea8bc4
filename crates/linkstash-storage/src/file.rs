use async_trait::async_trait;
use linkstash_core::snapshot::{decode, encode};
use linkstash_core::{SnapshotStore, StorageError, UrlMapping};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, trace};

/// Storage key the snapshot is filed under.
pub const DEFAULT_KEY: &str = "urlList";

/// Snapshot persisted as `<dir>/<key>.json`.
///
/// Saves write the full array to a temporary sibling file, flush it to disk
/// and rename it over the target, so a reader never observes a partially
/// written snapshot.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshot {
    dir: PathBuf,
    key: String,
}

impl JsonFileSnapshot {
    /// Creates a snapshot under `dir` using the default `urlList` key.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_key(dir, DEFAULT_KEY)
    }

    pub fn with_key(dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            key: key.into(),
        }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }

    fn temp_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json.tmp", self.key))
    }
}

fn unavailable(path: &Path, err: std::io::Error) -> StorageError {
    StorageError::Unavailable(format!("{}: {}", path.display(), err))
}

/// Flushes the directory entry so a completed rename survives a crash.
#[cfg(unix)]
async fn sync_dir(dir: &Path) -> Result<(), StorageError> {
    let handle = tokio::fs::File::open(dir)
        .await
        .map_err(|e| unavailable(dir, e))?;
    handle.sync_all().await.map_err(|e| unavailable(dir, e))
}

// Directories cannot be opened as files here.
#[cfg(not(unix))]
async fn sync_dir(_dir: &Path) -> Result<(), StorageError> {
    Ok(())
}

#[async_trait]
impl SnapshotStore for JsonFileSnapshot {
    async fn load(&self) -> Result<Option<Vec<UrlMapping>>, StorageError> {
        let path = self.path();
        trace!(path = %path.display(), "loading snapshot");

        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "snapshot file does not exist");
                return Ok(None);
            }
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                return Err(StorageError::InvalidData(format!(
                    "{}: {}",
                    path.display(),
                    err
                )));
            }
            Err(err) => return Err(unavailable(&path, err)),
        };

        decode(&raw).map(Some)
    }

    async fn save(&self, mappings: &[UrlMapping]) -> Result<(), StorageError> {
        let encoded = encode(mappings)?;
        let path = self.path();
        let temp = self.temp_path();

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| unavailable(&self.dir, e))?;

        let mut file = tokio::fs::File::create(&temp)
            .await
            .map_err(|e| unavailable(&temp, e))?;
        file.write_all(encoded.as_bytes())
            .await
            .map_err(|e| unavailable(&temp, e))?;
        file.sync_all().await.map_err(|e| unavailable(&temp, e))?;
        drop(file);

        tokio::fs::rename(&temp, &path)
            .await
            .map_err(|e| unavailable(&path, e))?;
        sync_dir(&self.dir).await?;

        debug!(path = %path.display(), mappings = mappings.len(), "snapshot saved");
        Ok(())
    }
}
