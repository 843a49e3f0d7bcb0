use mmds_core::{Article, SeoMeta};
use mmds_news::format_created_at;
use serde::{Deserialize, Serialize};

/// Query string of `GET /tin-tuc`. Both values stay raw strings so a bad
/// page number falls back to page 1 instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct NewsListParams {
    pub search: Option<String>,
    pub page: Option<String>,
}

/// An article plus its creation time formatted for display.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleView {
    #[serde(flatten)]
    pub article: Article,
    pub created_at_display: String,
}

impl From<Article> for ArticleView {
    fn from(article: Article) -> Self {
        let created_at_display = format_created_at(article.created_at);
        Self {
            article,
            created_at_display,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsListResponse {
    pub seo: SeoMeta,
    pub news_articles: Vec<ArticleView>,
    pub current_page: usize,
    pub total_pages: usize,
    pub search_query: String,
}

#[derive(Debug, Serialize)]
pub struct ArticleDetailResponse {
    pub seo: SeoMeta,
    pub article: ArticleView,
}
