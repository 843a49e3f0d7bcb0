//! HTTP surface of the MMDS site.
//!
//! Wires the news, SEO and contact crates into an axum [`Router`](axum::Router):
//! public pages and news, the sitemap, the contact form and the token-gated
//! admin API.

pub mod app;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod model;
pub mod state;

pub use app::App;
pub use state::{AppSettings, AppState, ArticleStore, SeoStore};
