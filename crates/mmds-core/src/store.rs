use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// A whole-document persistence backend.
///
/// Every read returns the full document and every write replaces it. There
/// is no partial write and no coordination between concurrent
/// read-modify-write sequences: the last `save` wins.
#[async_trait]
pub trait DocumentStore<D>: Send + Sync + 'static
where
    D: Send + Sync + 'static,
{
    /// Reads and decodes the current document.
    async fn load(&self) -> Result<D>;

    /// Encodes and writes `document`, replacing whatever was stored.
    async fn save(&self, document: &D) -> Result<()>;
}

#[async_trait]
impl<D, S> DocumentStore<D> for Arc<S>
where
    D: Send + Sync + 'static,
    S: DocumentStore<D> + ?Sized,
{
    async fn load(&self) -> Result<D> {
        (**self).load().await
    }

    async fn save(&self, document: &D) -> Result<()> {
        (**self).save(document).await
    }
}
