use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mmds_news::NewsError;
use mmds_seo::{SeoError, SitemapError};
use thiserror::Error;
use tracing::error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    News(#[from] NewsError),
    #[error(transparent)]
    Sitemap(#[from] SitemapError),
    #[error(transparent)]
    Seo(#[from] SeoError),
    #[error("admin credentials required")]
    Unauthorized,
}

fn json_error(status: StatusCode, error: &'static str, message: String) -> Response {
    (status, Json(ErrorResponse { error, message })).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::News(NewsError::DuplicateLink(link)) => json_error(
                StatusCode::CONFLICT,
                "duplicate_link",
                format!("Đường dẫn bài viết '{link}' đã tồn tại."),
            ),
            AppError::News(NewsError::NotFound(id)) => json_error(
                StatusCode::NOT_FOUND,
                "article_not_found",
                format!("Không tìm thấy bài viết #{id}."),
            ),
            AppError::News(NewsError::StorageUnavailable(e)) => {
                error!(error = %e, "article storage unavailable");
                json_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "storage_unavailable",
                    "Không thể đọc dữ liệu tin tức.".to_string(),
                )
            }
            AppError::Seo(e) => {
                error!(error = %e, "seo storage unavailable");
                json_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "storage_unavailable",
                    "Không thể lưu dữ liệu SEO.".to_string(),
                )
            }
            AppError::Sitemap(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error generating sitemap.",
            )
                .into_response(),
            AppError::Unauthorized => json_error(
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "Authorization required".to_string(),
            ),
        }
    }
}
