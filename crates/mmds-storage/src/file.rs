use async_trait::async_trait;
use mmds_core::error::{Result, StorageError};
use mmds_core::DocumentStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Keeps one document as a JSON file on disk.
///
/// Every `load` reads the file from scratch and every `save` rewrites it in
/// full, pretty-printed with two-space indentation. Nothing is cached between
/// calls and the write is a plain overwrite, not an atomic rename.
pub struct JsonFileStore<D> {
    path: PathBuf,
    _document: PhantomData<fn() -> D>,
}

impl<D> JsonFileStore<D> {
    /// Creates a store backed by the file at `path`. The file is not touched
    /// until the first `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _document: PhantomData,
        }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<D> Clone for JsonFileStore<D> {
    fn clone(&self) -> Self {
        Self::new(self.path.clone())
    }
}

impl<D> fmt::Debug for JsonFileStore<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonFileStore")
            .field("path", &self.path)
            .finish()
    }
}

#[async_trait]
impl<D> DocumentStore<D> for JsonFileStore<D>
where
    D: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn load(&self) -> Result<D> {
        trace!(path = %self.path.display(), "reading document");

        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            StorageError::Unavailable(format!("failed to read {}: {e}", self.path.display()))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            StorageError::InvalidData(format!("failed to parse {}: {e}", self.path.display()))
        })
    }

    async fn save(&self, document: &D) -> Result<()> {
        let encoded = serde_json::to_string_pretty(document).map_err(|e| {
            StorageError::Operation(format!("failed to encode {}: {e}", self.path.display()))
        })?;

        tokio::fs::write(&self.path, encoded).await.map_err(|e| {
            StorageError::Unavailable(format!("failed to write {}: {e}", self.path.display()))
        })?;

        debug!(path = %self.path.display(), "document rewritten");
        Ok(())
    }
}
