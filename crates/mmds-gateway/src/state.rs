use std::sync::Arc;

use mmds_contact::Mailer;
use mmds_core::{ArticleDocument, Clock, DocumentStore, SeoDocument, SystemClock};
use mmds_news::ArticleRepository;
use mmds_seo::{SeoConfig, SeoResolver, SeoRouteRepository, SitemapSynthesizer};
use typed_builder::TypedBuilder;

pub type ArticleStore = Arc<dyn DocumentStore<ArticleDocument>>;
pub type SeoStore = Arc<dyn DocumentStore<SeoDocument>>;

/// Everything besides the two document stores that the handlers need.
#[derive(TypedBuilder)]
pub struct AppSettings {
    /// Public origin used for sitemap URLs, e.g. `https://mmds.vn`.
    #[builder(setter(into))]
    pub base_url: String,
    /// Bearer token for `/admin`. With `None` every admin request is refused.
    #[builder(default)]
    pub admin_token: Option<String>,
    #[builder(default)]
    pub seo: SeoConfig,
    #[builder(default = Arc::new(SystemClock))]
    pub clock: Arc<dyn Clock>,
    /// Contact form delivery. With `None` submissions are answered with a failure.
    #[builder(default)]
    pub mailer: Option<Arc<dyn Mailer>>,
}

#[derive(Clone)]
pub struct AppState {
    pub articles: ArticleRepository<ArticleStore>,
    pub seo: Arc<SeoResolver<SeoStore, ArticleStore>>,
    pub sitemap: Arc<SitemapSynthesizer<SeoStore, ArticleStore>>,
    pub seo_routes: SeoRouteRepository<SeoStore>,
    pub mailer: Option<Arc<dyn Mailer>>,
    pub base_url: Arc<str>,
    pub admin_token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(articles: ArticleStore, seo: SeoStore, settings: AppSettings) -> Self {
        let AppSettings {
            base_url,
            admin_token,
            seo: seo_config,
            clock,
            mailer,
        } = settings;

        Self {
            articles: ArticleRepository::new(articles.clone()).with_clock(clock.clone()),
            seo: Arc::new(SeoResolver::new(
                seo.clone(),
                articles.clone(),
                seo_config.clone(),
            )),
            sitemap: Arc::new(
                SitemapSynthesizer::new(seo.clone(), articles, seo_config).with_clock(clock),
            ),
            seo_routes: SeoRouteRepository::new(seo),
            mailer,
            base_url: base_url.into(),
            admin_token: admin_token.map(Into::into),
        }
    }
}
