use crate::config::SeoConfig;
use crate::error::SitemapError;
use jiff::civil::Date;
use mmds_core::clock::utc_date;
use mmds_core::{ArticleDocument, Clock, DocumentStore, SeoDocument, SystemClock};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

/// A URL listed in the sitemap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: Date,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sitemap {
    pub entries: Vec<SitemapEntry>,
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

impl Sitemap {
    /// Renders a sitemaps.org 0.9 `urlset`.
    pub fn to_xml(&self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
        );
        for entry in &self.entries {
            xml.push_str(&format!(
                "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n  </url>\n",
                escape_xml(&entry.url),
                entry.last_modified,
            ));
        }
        xml.push_str("</urlset>\n");
        xml
    }
}

/// Builds the sitemap from the SEO routes and the article collection.
///
/// Unlike [`crate::SeoResolver`] there is no fallback: if either document is
/// unreadable the whole operation fails.
#[derive(Clone)]
pub struct SitemapSynthesizer<R, A> {
    routes: R,
    articles: A,
    config: SeoConfig,
    clock: Arc<dyn Clock>,
}

impl<R, A> SitemapSynthesizer<R, A>
where
    R: DocumentStore<SeoDocument>,
    A: DocumentStore<ArticleDocument>,
{
    pub fn new(routes: R, articles: A, config: SeoConfig) -> Self {
        Self {
            routes,
            articles,
            config,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Lists every literal route (dated today) followed by every article
    /// (dated by its creation day), each in document order. An article
    /// without a creation time fails the whole sitemap.
    pub async fn generate(&self, base_url: &str) -> Result<Sitemap, SitemapError> {
        match self.build(base_url).await {
            Ok(sitemap) => {
                info!(urls = sitemap.entries.len(), "sitemap generated");
                Ok(sitemap)
            }
            Err(e) => {
                error!(error = %e, "sitemap generation failed");
                Err(e)
            }
        }
    }

    async fn build(&self, base_url: &str) -> Result<Sitemap, SitemapError> {
        let routes = self.routes.load().await?;
        let articles = self.articles.load().await?;

        let base_url = base_url.trim_end_matches('/');
        let today = self.clock.today();

        let mut entries: Vec<_> = routes
            .routes
            .iter()
            .filter(|route| !route.is_parameterized())
            .map(|route| SitemapEntry {
                url: format!("{base_url}{}", route.path),
                last_modified: today,
            })
            .collect();

        for article in &articles {
            let created_at = article
                .created_at
                .ok_or(SitemapError::MissingCreatedAt(article.id))?;
            entries.push(SitemapEntry {
                url: format!(
                    "{base_url}{}",
                    self.config.article_path(&article.article_link)
                ),
                last_modified: utc_date(created_at),
            });
        }

        Ok(Sitemap { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mmds_core::{Article, FixedClock, SeoRoute};
    use mmds_storage::InMemoryStore;

    type Synth = SitemapSynthesizer<InMemoryStore<SeoDocument>, InMemoryStore<ArticleDocument>>;

    fn article(id: u64, link: &str, created_at: &str) -> Article {
        Article {
            id,
            image_src: String::new(),
            alt_text: String::new(),
            title: String::new(),
            article_link: link.to_string(),
            content: String::new(),
            author: String::new(),
            created_at: Some(created_at.parse().unwrap()),
        }
    }

    fn synth(routes: SeoDocument, articles: ArticleDocument) -> Synth {
        SitemapSynthesizer::new(
            InMemoryStore::new(routes),
            InMemoryStore::new(articles),
            SeoConfig::default(),
        )
        .with_clock(FixedClock("2026-10-18T09:00:00Z".parse().unwrap()))
    }

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn one_route_and_one_article() {
        let routes = SeoDocument::new(vec![
            SeoRoute::new("/cong-ty", "T", "D"),
            SeoRoute::new("/tin-tuc/:articleLink", "Xem {{TEN_BAI_VIET}}", ""),
        ]);
        let s = synth(routes, vec![article(1, "a", "2024-01-05T10:00:00Z")]);

        let sitemap = s.generate("https://mmds.vn").await.unwrap();

        assert_eq!(
            sitemap.entries,
            vec![
                SitemapEntry {
                    url: "https://mmds.vn/cong-ty".to_string(),
                    last_modified: date("2026-10-18"),
                },
                SitemapEntry {
                    url: "https://mmds.vn/tin-tuc/a".to_string(),
                    last_modified: date("2024-01-05"),
                },
            ]
        );
    }

    #[tokio::test]
    async fn keeps_source_order() {
        let routes = SeoDocument::new(vec![
            SeoRoute::new("/huong-dan", "", ""),
            SeoRoute::new("/", "", ""),
        ]);
        let articles = vec![
            article(5, "moi", "2024-03-01T00:00:00Z"),
            article(2, "cu", "2023-03-01T00:00:00Z"),
        ];

        let sitemap = synth(routes, articles).generate("https://mmds.vn/").await.unwrap();
        let urls: Vec<&str> = sitemap.entries.iter().map(|e| e.url.as_str()).collect();

        assert_eq!(
            urls,
            vec![
                "https://mmds.vn/huong-dan",
                "https://mmds.vn/",
                "https://mmds.vn/tin-tuc/moi",
                "https://mmds.vn/tin-tuc/cu",
            ]
        );
    }

    #[tokio::test]
    async fn last_modified_is_the_utc_day() {
        let s = synth(
            SeoDocument::default(),
            vec![article(1, "a", "2024-01-05T23:59:59Z")],
        );

        let sitemap = s.generate("https://mmds.vn").await.unwrap();
        assert_eq!(sitemap.entries[0].last_modified, date("2024-01-05"));
    }

    #[tokio::test]
    async fn unreadable_articles_fail_the_whole_sitemap() {
        let s: Synth = SitemapSynthesizer::new(
            InMemoryStore::new(SeoDocument::new(vec![SeoRoute::new("/", "", "")])),
            InMemoryStore::unavailable(),
            SeoConfig::default(),
        );

        let err = s.generate("https://mmds.vn").await.unwrap_err();
        assert!(matches!(err, SitemapError::Generation(_)));
    }

    #[tokio::test]
    async fn unreadable_routes_fail_the_whole_sitemap() {
        let s: Synth = SitemapSynthesizer::new(
            InMemoryStore::unavailable(),
            InMemoryStore::new(vec![]),
            SeoConfig::default(),
        );

        assert!(s.generate("https://mmds.vn").await.is_err());
    }

    #[tokio::test]
    async fn article_without_created_at_fails_the_sitemap() {
        let mut legacy = article(3, "cu", "2024-01-05T10:00:00Z");
        legacy.created_at = None;
        let s = synth(SeoDocument::default(), vec![legacy]);

        let err = s.generate("https://mmds.vn").await.unwrap_err();
        assert!(matches!(err, SitemapError::MissingCreatedAt(3)));
    }

    #[test]
    fn renders_urlset_xml() {
        let sitemap = Sitemap {
            entries: vec![SitemapEntry {
                url: "https://mmds.vn/tin-tuc/a&b".to_string(),
                last_modified: date("2024-01-05"),
            }],
        };

        let xml = sitemap.to_xml();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
        assert!(xml.contains("<loc>https://mmds.vn/tin-tuc/a&amp;b</loc>"));
        assert!(xml.contains("<lastmod>2024-01-05</lastmod>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }
}
