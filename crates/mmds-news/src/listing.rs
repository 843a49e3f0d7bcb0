use mmds_core::Article;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;

/// Number of articles on one page of the public listing.
pub const PAGE_SIZE: usize = 5;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// A parsed listing request: an optional search term and a 1-based page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    pub search: Option<String>,
    pub page: usize,
}

impl NewsQuery {
    pub fn new(search: Option<String>, page: usize) -> Self {
        Self {
            search: search.filter(|s| !s.is_empty()),
            page: page.max(1),
        }
    }

    /// Builds a query from raw request parameters. An empty search means no
    /// filter; a missing, non-numeric or zero page means page 1.
    pub fn parse(search: Option<&str>, page: Option<&str>) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<usize>().ok())
            .unwrap_or(1);
        Self::new(search.map(str::to_owned), page)
    }
}

impl Default for NewsQuery {
    fn default() -> Self {
        Self::new(None, 1)
    }
}

/// One page of the public listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPage {
    pub items: Vec<Article>,
    pub total_pages: usize,
    pub page: usize,
    /// The search term echoed back, empty when there was none.
    pub query: String,
}

/// Removes every `<...>` tag, leaving the text between them.
pub fn strip_tags(html: &str) -> Cow<'_, str> {
    TAG.replace_all(html, "")
}

fn matches(article: &Article, needle: &str) -> bool {
    article.title.to_lowercase().contains(needle)
        || strip_tags(&article.content).to_lowercase().contains(needle)
}

/// Orders, filters and pages `articles`.
///
/// Articles are shown newest first (descending `id`). With a search term,
/// only articles whose title or tag-stripped content contains it
/// (case-insensitive) are kept. A page past the end is empty, not an error.
pub fn paginate(mut articles: Vec<Article>, query: &NewsQuery) -> NewsPage {
    articles.sort_by(|a, b| b.id.cmp(&a.id));

    if let Some(search) = &query.search {
        let needle = search.to_lowercase();
        articles.retain(|article| matches(article, &needle));
    }

    let total_pages = articles.len().div_ceil(PAGE_SIZE);
    let start = (query.page - 1).saturating_mul(PAGE_SIZE);
    let items = articles.into_iter().skip(start).take(PAGE_SIZE).collect();

    NewsPage {
        items,
        total_pages,
        page: query.page,
        query: query.search.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: u64, title: &str, content: &str) -> Article {
        Article {
            id,
            image_src: String::new(),
            alt_text: String::new(),
            title: title.to_string(),
            article_link: format!("bai-{id}"),
            content: content.to_string(),
            author: String::new(),
            created_at: Some("2024-01-05T10:00:00Z".parse().unwrap()),
        }
    }

    fn twelve() -> Vec<Article> {
        (1..=12).map(|id| article(id, "Tin", "<p>nội dung</p>")).collect()
    }

    fn ids(page: &NewsPage) -> Vec<u64> {
        page.items.iter().map(|a| a.id).collect()
    }

    #[test]
    fn second_page_holds_ranks_six_to_ten() {
        let page = paginate(twelve(), &NewsQuery::new(None, 2));

        assert_eq!(ids(&page), vec![7, 6, 5, 4, 3]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 2);
    }

    #[test]
    fn first_page_is_newest_first() {
        let page = paginate(twelve(), &NewsQuery::default());
        assert_eq!(ids(&page), vec![12, 11, 10, 9, 8]);
    }

    #[test]
    fn last_page_is_partial() {
        let page = paginate(twelve(), &NewsQuery::new(None, 3));
        assert_eq!(ids(&page), vec![2, 1]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let page = paginate(twelve(), &NewsQuery::new(None, 9));

        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 9);
    }

    #[test]
    fn search_matches_tag_stripped_content() {
        let articles = vec![
            article(1, "Khuyến mãi", "<p>Giá tốt</p>"),
            article(2, "Thông báo", "<p>Nghỉ lễ</p>"),
        ];

        let page = paginate(articles, &NewsQuery::new(Some("giá".to_string()), 1));

        assert_eq!(ids(&page), vec![1]);
        assert_eq!(page.query, "giá");
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        let articles = vec![
            article(1, "Chữ Ký Số", ""),
            article(2, "Hóa đơn", ""),
        ];

        let page = paginate(articles, &NewsQuery::new(Some("chữ ký".to_string()), 1));
        assert_eq!(ids(&page), vec![1]);
    }

    #[test]
    fn search_does_not_match_inside_tags() {
        let articles = vec![article(1, "A", r#"<span class="gia">x</span>"#)];

        let page = paginate(articles, &NewsQuery::new(Some("gia".to_string()), 1));
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn parse_defaults() {
        assert_eq!(NewsQuery::parse(None, None), NewsQuery::default());
        assert_eq!(NewsQuery::parse(Some(""), Some("abc")).page, 1);
        assert_eq!(NewsQuery::parse(None, Some("0")).page, 1);
        assert_eq!(NewsQuery::parse(None, Some("-2")).page, 1);
        assert_eq!(NewsQuery::parse(None, Some(" 3 ")).page, 3);
        assert_eq!(NewsQuery::parse(Some(""), None).search, None);
    }

    #[test]
    fn strip_tags_keeps_text() {
        assert_eq!(strip_tags("<p>Giá <b>tốt</b></p>"), "Giá tốt");
    }
}
