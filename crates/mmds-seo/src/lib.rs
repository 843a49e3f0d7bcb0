//! SEO metadata for the public site.
//!
//! - [`SeoResolver`] maps a request path to the title/description pair the
//!   page should carry, including the templated news-detail route.
//! - [`SitemapSynthesizer`] lists every crawlable URL from the same two
//!   documents.
//! - [`SeoRouteRepository`] lets the admin area edit existing entries.

pub mod config;
pub mod error;
pub mod resolver;
pub mod routes;
pub mod sitemap;

pub use config::SeoConfig;
pub use error::{SeoError, SitemapError};
pub use resolver::SeoResolver;
pub use routes::{SeoEdit, SeoRouteRepository};
pub use sitemap::{Sitemap, SitemapEntry, SitemapSynthesizer};
