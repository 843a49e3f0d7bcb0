use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// The whole article collection as it is persisted: one ordered sequence.
pub type ArticleDocument = Vec<Article>;

/// A news article stored in the articles document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Assigned at creation and never changed afterwards.
    pub id: u64,
    /// Path or URL of the cover image. May be empty.
    #[serde(default)]
    pub image_src: String,
    #[serde(default)]
    pub alt_text: String,
    pub title: String,
    /// Public slug, unique across the collection (case-sensitive).
    pub article_link: String,
    /// Sanitized HTML body.
    pub content: String,
    #[serde(default)]
    pub author: String,
    /// Set at creation. Records written before the field existed have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

impl Article {
    /// Builds a new article from a draft. The caller is responsible for
    /// sanitizing `draft.content` beforehand.
    pub fn from_draft(id: u64, draft: ArticleDraft, created_at: Timestamp) -> Self {
        Self {
            id,
            image_src: draft.image_src,
            alt_text: draft.alt_text,
            title: draft.title,
            article_link: draft.article_link,
            content: draft.content,
            author: draft.author,
            created_at: Some(created_at),
        }
    }

    /// Replaces every field present in `patch`. `id` and `created_at` are
    /// never touched.
    pub fn apply(&mut self, patch: ArticlePatch) {
        let ArticlePatch {
            image_src,
            alt_text,
            title,
            article_link,
            content,
            author,
        } = patch;

        if let Some(value) = image_src {
            self.image_src = value;
        }
        if let Some(value) = alt_text {
            self.alt_text = value;
        }
        if let Some(value) = title {
            self.title = value;
        }
        if let Some(value) = article_link {
            self.article_link = value;
        }
        if let Some(value) = content {
            self.content = value;
        }
        if let Some(value) = author {
            self.author = value;
        }
    }
}

/// Fields submitted when creating an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    #[serde(default)]
    pub image_src: String,
    #[serde(default)]
    pub alt_text: String,
    pub title: String,
    pub article_link: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
}

/// A partial update. `None` keeps the stored value, `Some` replaces it,
/// including `Some(String::new())` which clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePatch {
    pub image_src: Option<String>,
    pub alt_text: Option<String>,
    pub title: Option<String>,
    pub article_link: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}
