use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Form, Json};
use mmds_core::{Article, ArticleDraft, ArticlePatch, SeoMeta};
use mmds_news::NewsError;

use crate::error::{AppError, Result};
use crate::model::{seo_edits_from_form, ArticleListResponse, SeoRoutesResponse, SeoUpdateResponse};
use crate::state::AppState;

pub const SEO_UPDATED_MESSAGE: &str = "Cập nhật SEO thành công!";

/// Articles in stored order.
pub async fn list_articles_handler(
    State(state): State<AppState>,
    Extension(seo): Extension<SeoMeta>,
) -> Result<Json<ArticleListResponse>> {
    let articles = state.articles.list().await?;
    Ok(Json(ArticleListResponse { seo, articles }))
}

pub async fn create_article_handler(
    State(state): State<AppState>,
    Json(draft): Json<ArticleDraft>,
) -> Result<(StatusCode, Json<Article>)> {
    let article = state.articles.create(draft).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

pub async fn get_article_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Article>> {
    state
        .articles
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or(AppError::News(NewsError::NotFound(id)))
}

pub async fn update_article_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<ArticlePatch>,
) -> Result<Json<Article>> {
    let article = state.articles.update(id, patch).await?;
    Ok(Json(article))
}

/// Deleting an unknown id is not an error.
pub async fn delete_article_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode> {
    state.articles.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_seo_handler(
    State(state): State<AppState>,
    Extension(seo): Extension<SeoMeta>,
) -> Json<SeoRoutesResponse> {
    Json(SeoRoutesResponse {
        seo,
        routes: state.seo_routes.routes().await,
    })
}

pub async fn update_seo_handler(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Json<SeoUpdateResponse>> {
    let edits = seo_edits_from_form(&form);
    let changed = state.seo_routes.update(&edits).await?;

    Ok(Json(SeoUpdateResponse {
        changed,
        message: SEO_UPDATED_MESSAGE,
    }))
}
