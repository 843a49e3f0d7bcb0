//! News articles: the file-backed repository, HTML sanitization and the
//! public listing/search paginator.

pub mod display;
pub mod error;
pub mod listing;
pub mod repository;
pub mod sanitize;

pub use display::{format_created_at, UNKNOWN_CREATED_AT};
pub use error::{NewsError, Result};
pub use listing::{NewsPage, NewsQuery, PAGE_SIZE};
pub use repository::ArticleRepository;
pub use sanitize::{AmmoniaSanitizer, HtmlSanitizer};
