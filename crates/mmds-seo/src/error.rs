use mmds_core::StorageError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum SitemapError {
    #[error("failed to generate sitemap: {0}")]
    Generation(#[from] StorageError),
    #[error("article {0} has no creation time")]
    MissingCreatedAt(u64),
}

#[derive(Debug, Clone, Error)]
pub enum SeoError {
    #[error("seo storage error: {0}")]
    Storage(#[from] StorageError),
}
