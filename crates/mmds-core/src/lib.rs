//! Core types and traits for the MMDS site.
//!
//! This crate holds the article and SEO document models shared by the news,
//! SEO and gateway crates, together with the [`DocumentStore`] seam every
//! persistence backend implements.

pub mod article;
pub mod clock;
pub mod error;
pub mod seo;
pub mod store;

pub use article::{Article, ArticleDocument, ArticleDraft, ArticlePatch};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Result, StorageError};
pub use seo::{SeoDocument, SeoMeta, SeoRoute};
pub use store::DocumentStore;
