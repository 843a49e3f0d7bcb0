use mmds_core::SeoMeta;
use typed_builder::TypedBuilder;

pub const DEFAULT_TITLE: &str = "MMDS.VN - Dịch vụ chất lượng";
pub const DEFAULT_DESCRIPTION: &str = "Chúng tôi cung cấp các dịch vụ tốt nhất.";
pub const ERROR_TITLE: &str = "MMDS.VN";
pub const ERROR_DESCRIPTION: &str = "Lỗi tải dữ liệu SEO.";
pub const ADMIN_TITLE: &str = "Admin - MMDS.VN";
pub const ADMIN_DESCRIPTION: &str = "Khu vực quản trị website.";
pub const ARTICLE_TITLE_PLACEHOLDER: &str = "{{TEN_BAI_VIET}}";
pub const NEWS_PREFIX: &str = "/tin-tuc";
pub const NEWS_TEMPLATE_PATH: &str = "/tin-tuc/:articleLink";

/// Constants the resolver and the sitemap work from.
#[derive(Debug, Clone, TypedBuilder)]
pub struct SeoConfig {
    /// Returned when no entry matches the request path.
    #[builder(default = SeoMeta::new(DEFAULT_TITLE, DEFAULT_DESCRIPTION))]
    pub default_meta: SeoMeta,
    /// Returned when a document cannot be read.
    #[builder(default = SeoMeta::new(ERROR_TITLE, ERROR_DESCRIPTION))]
    pub error_meta: SeoMeta,
    /// Carried by every admin page instead of a resolved entry.
    #[builder(default = SeoMeta::new(ADMIN_TITLE, ADMIN_DESCRIPTION))]
    pub admin_meta: SeoMeta,
    /// Token in the template entry replaced by the article title.
    #[builder(default = ARTICLE_TITLE_PLACEHOLDER.to_string(), setter(into))]
    pub placeholder: String,
    /// Path prefix of news detail pages, without a trailing slash.
    #[builder(default = NEWS_PREFIX.to_string(), setter(into))]
    pub news_prefix: String,
    /// Literal `path` of the template entry for news detail pages.
    #[builder(default = NEWS_TEMPLATE_PATH.to_string(), setter(into))]
    pub news_template: String,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SeoConfig {
    /// Extracts the slug from a news detail path: the news prefix followed by
    /// exactly one non-empty segment.
    pub fn article_slug<'a>(&self, path: &'a str) -> Option<&'a str> {
        let slug = path.strip_prefix(self.news_prefix.as_str())?.strip_prefix('/')?;
        (!slug.is_empty() && !slug.contains('/')).then_some(slug)
    }

    /// The public path of an article.
    pub fn article_path(&self, article_link: &str) -> String {
        format!("{}/{}", self.news_prefix, article_link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_requires_exactly_one_segment() {
        let config = SeoConfig::default();

        assert_eq!(config.article_slug("/tin-tuc/abc"), Some("abc"));
        assert_eq!(config.article_slug("/tin-tuc/"), None);
        assert_eq!(config.article_slug("/tin-tuc"), None);
        assert_eq!(config.article_slug("/tin-tuc/a/b"), None);
        assert_eq!(config.article_slug("/tin-tucabc"), None);
        assert_eq!(config.article_slug("/cong-ty"), None);
    }

    #[test]
    fn builder_overrides() {
        let config = SeoConfig::builder()
            .news_prefix("/news")
            .placeholder("%TITLE%")
            .build();

        assert_eq!(config.article_slug("/news/x"), Some("x"));
        assert_eq!(config.article_path("x"), "/news/x");
        assert_eq!(config.placeholder, "%TITLE%");
        assert_eq!(config.default_meta.title, DEFAULT_TITLE);
    }

    #[test]
    fn admin_meta_defaults_and_overrides() {
        assert_eq!(
            SeoConfig::default().admin_meta,
            SeoMeta::new("Admin - MMDS.VN", "Khu vực quản trị website.")
        );

        let config = SeoConfig::builder()
            .admin_meta(SeoMeta::new("Quản trị", "Nội bộ"))
            .build();
        assert_eq!(config.admin_meta.title, "Quản trị");
    }
}
