pub mod admin;
pub mod news;

pub use admin::{seo_edits_from_form, ArticleListResponse, SeoRoutesResponse, SeoUpdateResponse};
pub use news::{ArticleDetailResponse, ArticleView, NewsListParams, NewsListResponse};

use mmds_core::SeoMeta;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}

/// A static page: which template to render and its metadata.
#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub page: &'static str,
    pub seo: SeoMeta,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: &'static str,
}
