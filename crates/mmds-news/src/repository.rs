use crate::error::{NewsError, Result};
use crate::listing::{self, NewsPage, NewsQuery};
use crate::sanitize::{AmmoniaSanitizer, HtmlSanitizer};
use mmds_core::{Article, ArticleDocument, ArticleDraft, ArticlePatch, Clock, DocumentStore, SystemClock};
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// CRUD over the articles document.
///
/// Every operation loads the whole collection from the store; every mutation
/// writes the whole collection back. Nothing is cached in between, and two
/// concurrent mutations race with the last write winning.
#[derive(Clone)]
pub struct ArticleRepository<S> {
    store: S,
    sanitizer: Arc<dyn HtmlSanitizer>,
    clock: Arc<dyn Clock>,
}

impl<S> ArticleRepository<S> {
    /// Creates a repository using ammonia for sanitization and the system clock.
    pub fn new(store: S) -> Self {
        Self {
            store,
            sanitizer: Arc::new(AmmoniaSanitizer),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_sanitizer(mut self, sanitizer: impl HtmlSanitizer) -> Self {
        self.sanitizer = Arc::new(sanitizer);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// `max(id) + 1`, or `1` for an empty collection.
fn next_id(articles: &[Article]) -> u64 {
    articles.iter().map(|a| a.id).max().map_or(1, |max| max + 1)
}

impl<S: DocumentStore<ArticleDocument>> ArticleRepository<S> {
    /// Returns every article in stored order.
    pub async fn list(&self) -> Result<Vec<Article>> {
        Ok(self.store.load().await?)
    }

    pub async fn find_by_link(&self, link: &str) -> Result<Option<Article>> {
        trace!(link = %link, "looking up article by link");
        let articles = self.store.load().await?;
        Ok(articles.into_iter().find(|a| a.article_link == link))
    }

    pub async fn find_by_id(&self, id: u64) -> Result<Option<Article>> {
        trace!(article_id = id, "looking up article by id");
        let articles = self.store.load().await?;
        Ok(articles.into_iter().find(|a| a.id == id))
    }

    /// Stores a new article and returns it with its assigned `id` and
    /// `created_at`. Fails with [`NewsError::DuplicateLink`] without writing
    /// anything if the link is taken.
    pub async fn create(&self, mut draft: ArticleDraft) -> Result<Article> {
        let mut articles = self.store.load().await?;

        if articles.iter().any(|a| a.article_link == draft.article_link) {
            warn!(link = %draft.article_link, "rejecting article with duplicate link");
            return Err(NewsError::DuplicateLink(draft.article_link));
        }

        draft.content = self.sanitizer.sanitize(&draft.content);
        let article = Article::from_draft(next_id(&articles), draft, self.clock.now());
        articles.push(article.clone());
        self.store.save(&articles).await?;

        info!(article_id = article.id, link = %article.article_link, "article created");
        Ok(article)
    }

    /// Applies `patch` to the article with `id` and returns the result.
    ///
    /// The new link, if any, must not belong to another article; keeping the
    /// article's own link is fine.
    pub async fn update(&self, id: u64, mut patch: ArticlePatch) -> Result<Article> {
        let mut articles = self.store.load().await?;

        let Some(index) = articles.iter().position(|a| a.id == id) else {
            debug!(article_id = id, "update target not found");
            return Err(NewsError::NotFound(id));
        };

        if let Some(link) = &patch.article_link {
            if articles.iter().any(|a| a.article_link == *link && a.id != id) {
                warn!(article_id = id, link = %link, "rejecting update to a link owned by another article");
                return Err(NewsError::DuplicateLink(link.clone()));
            }
        }

        if let Some(content) = patch.content.as_mut() {
            *content = self.sanitizer.sanitize(content);
        }

        articles[index].apply(patch);
        let updated = articles[index].clone();
        self.store.save(&articles).await?;

        info!(article_id = id, "article updated");
        Ok(updated)
    }

    /// Removes the article with `id`. Returns whether anything was removed;
    /// an unknown id is not an error. The document is rewritten either way.
    pub async fn delete(&self, id: u64) -> Result<bool> {
        let mut articles = self.store.load().await?;
        let before = articles.len();
        articles.retain(|a| a.id != id);
        let removed = articles.len() != before;
        self.store.save(&articles).await?;

        info!(article_id = id, removed, "article delete processed");
        Ok(removed)
    }

    /// The public listing: newest first, filtered by `query.search`, paged.
    pub async fn listing(&self, query: &NewsQuery) -> Result<NewsPage> {
        let articles = self.store.load().await?;
        Ok(listing::paginate(articles, query))
    }
}
