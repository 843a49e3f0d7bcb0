use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Extension, Json};
use mmds_core::SeoMeta;
use mmds_news::NewsQuery;
use tracing::debug;

use crate::error::Result;
use crate::model::{ArticleDetailResponse, ArticleView, NewsListParams, NewsListResponse};
use crate::state::AppState;

pub async fn news_list_handler(
    State(state): State<AppState>,
    Extension(seo): Extension<SeoMeta>,
    Query(params): Query<NewsListParams>,
) -> Result<Json<NewsListResponse>> {
    let query = NewsQuery::parse(params.search.as_deref(), params.page.as_deref());
    let page = state.articles.listing(&query).await?;

    Ok(Json(NewsListResponse {
        seo,
        news_articles: page.items.into_iter().map(ArticleView::from).collect(),
        current_page: page.page,
        total_pages: page.total_pages,
        search_query: page.query,
    }))
}

/// Unknown links send the visitor back to the listing.
pub async fn news_detail_handler(
    State(state): State<AppState>,
    Extension(seo): Extension<SeoMeta>,
    Path(article_link): Path<String>,
) -> Result<Response> {
    let Some(article) = state.articles.find_by_link(&article_link).await? else {
        debug!(article_link = %article_link, "article not found, redirecting to listing");
        return Ok(Redirect::to(state.seo.config().news_prefix.as_str()).into_response());
    };

    Ok(Json(ArticleDetailResponse {
        seo,
        article: article.into(),
    })
    .into_response())
}
