use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The title/description pair attached to a rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
}

impl SeoMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Returns a copy with every occurrence of `placeholder` replaced by `value`
    /// in both the title and the description.
    pub fn substitute(&self, placeholder: &str, value: &str) -> Self {
        Self {
            title: self.title.replace(placeholder, value),
            description: self.description.replace(placeholder, value),
        }
    }
}

/// One entry of the SEO routes document.
///
/// `path` is either a literal request path (`/cong-ty`) or a parameterized
/// pattern (`/tin-tuc/:articleLink`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoRoute {
    pub path: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Keys this crate does not interpret, kept so rewrites do not drop them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SeoRoute {
    pub fn new(
        path: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            description: description.into(),
            extra: Map::new(),
        }
    }

    /// Whether the path carries a `:param` segment.
    pub fn is_parameterized(&self) -> bool {
        self.path.contains(':')
    }

    pub fn meta(&self) -> SeoMeta {
        SeoMeta::new(self.title.clone(), self.description.clone())
    }
}

/// The SEO routes document: `{ "routes": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoDocument {
    #[serde(default)]
    pub routes: Vec<SeoRoute>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SeoDocument {
    pub fn new(routes: Vec<SeoRoute>) -> Self {
        Self {
            routes,
            extra: Map::new(),
        }
    }

    /// Finds the entry whose path is exactly `path`.
    pub fn find(&self, path: &str) -> Option<&SeoRoute> {
        self.routes.iter().find(|route| route.path == path)
    }
}
