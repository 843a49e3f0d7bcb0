use crate::config::SeoConfig;
use mmds_core::{ArticleDocument, DocumentStore, Result, SeoDocument, SeoMeta};
use tracing::{debug, error, trace};

/// Resolves the title/description pair for a request path.
///
/// Both documents are read fresh on every call. Resolution never fails: a
/// storage problem is logged and answered with [`SeoConfig::error_meta`] so
/// page rendering is never blocked on metadata.
#[derive(Debug, Clone)]
pub struct SeoResolver<R, A> {
    routes: R,
    articles: A,
    config: SeoConfig,
}

impl<R, A> SeoResolver<R, A>
where
    R: DocumentStore<SeoDocument>,
    A: DocumentStore<ArticleDocument>,
{
    pub fn new(routes: R, articles: A, config: SeoConfig) -> Self {
        Self {
            routes,
            articles,
            config,
        }
    }

    pub fn config(&self) -> &SeoConfig {
        &self.config
    }

    /// Returns the metadata for `path`.
    ///
    /// 1. An entry whose `path` equals `path` wins verbatim.
    /// 2. A news detail path uses the template entry with the placeholder
    ///    replaced by the article title, if both the template and the
    ///    article exist.
    /// 3. Anything else gets [`SeoConfig::default_meta`].
    pub async fn resolve(&self, path: &str) -> SeoMeta {
        match self.try_resolve(path).await {
            Ok(meta) => meta,
            Err(e) => {
                error!(path = %path, error = %e, "failed to load seo data");
                self.config.error_meta.clone()
            }
        }
    }

    async fn try_resolve(&self, path: &str) -> Result<SeoMeta> {
        let document = self.routes.load().await?;

        if let Some(route) = document.find(path) {
            trace!(path = %path, "seo route matched exactly");
            return Ok(route.meta());
        }

        if let Some(slug) = self.config.article_slug(path) {
            if let Some(template) = document.find(&self.config.news_template) {
                let articles = self.articles.load().await?;
                if let Some(article) = articles.iter().find(|a| a.article_link == slug) {
                    debug!(path = %path, article_id = article.id, "seo resolved from article template");
                    return Ok(template
                        .meta()
                        .substitute(&self.config.placeholder, &article.title));
                }
            }
        }

        trace!(path = %path, "no seo route matched, using default");
        Ok(self.config.default_meta.clone())
    }
}
