use axum::{Extension, Json};
use mmds_core::SeoMeta;

use crate::model::PageResponse;

fn page(page: &'static str, seo: SeoMeta) -> Json<PageResponse> {
    Json(PageResponse { page, seo })
}

pub async fn home_handler(Extension(seo): Extension<SeoMeta>) -> Json<PageResponse> {
    page("index", seo)
}

pub async fn guide_handler(Extension(seo): Extension<SeoMeta>) -> Json<PageResponse> {
    page("guide", seo)
}

pub async fn company_handler(Extension(seo): Extension<SeoMeta>) -> Json<PageResponse> {
    page("company", seo)
}
