use async_trait::async_trait;
use mmds_core::error::{Result, StorageError};
use mmds_core::DocumentStore;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory implementation of [`DocumentStore`].
///
/// Holds a single document behind a lock and hands out clones on `load`.
/// A store created with [`InMemoryStore::unavailable`] has no document and
/// fails every `load` until something is saved, which mirrors a missing file.
#[derive(Debug)]
pub struct InMemoryStore<D> {
    document: RwLock<Option<D>>,
    writes: AtomicUsize,
}

impl<D> InMemoryStore<D> {
    /// Creates a store holding `document`.
    pub fn new(document: D) -> Self {
        Self {
            document: RwLock::new(Some(document)),
            writes: AtomicUsize::new(0),
        }
    }

    /// Creates a store with nothing in it.
    pub fn unavailable() -> Self {
        Self {
            document: RwLock::new(None),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of successful `save` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl<D: Default> Default for InMemoryStore<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

#[async_trait]
impl<D> DocumentStore<D> for InMemoryStore<D>
where
    D: Clone + Send + Sync + 'static,
{
    async fn load(&self) -> Result<D> {
        self.document
            .read()
            .clone()
            .ok_or_else(|| StorageError::Unavailable("no document stored".to_string()))
    }

    async fn save(&self, document: &D) -> Result<()> {
        *self.document.write() = Some(document.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
