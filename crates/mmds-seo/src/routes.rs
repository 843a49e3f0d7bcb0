use crate::error::SeoError;
use mmds_core::{DocumentStore, SeoDocument, SeoRoute};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A change to one existing SEO entry, addressed by its `path`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoEdit {
    pub path: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Admin access to the SEO routes document.
///
/// Entries are seeded outside the application; this repository only edits
/// the title and description of entries that already exist.
#[derive(Debug, Clone)]
pub struct SeoRouteRepository<S> {
    store: S,
}

impl<S: DocumentStore<SeoDocument>> SeoRouteRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Reads the document, treating a missing or corrupt one as empty.
    async fn load_or_empty(&self) -> SeoDocument {
        match self.store.load().await {
            Ok(document) => document,
            Err(e) => {
                warn!(error = %e, "seo document unreadable, treating it as empty");
                SeoDocument::default()
            }
        }
    }

    /// Lists every entry in document order.
    pub async fn routes(&self) -> Vec<SeoRoute> {
        self.load_or_empty().await.routes
    }

    /// Applies `edits` and rewrites the document. Edits naming a path with no
    /// entry are ignored. Returns how many entries changed.
    pub async fn update(&self, edits: &[SeoEdit]) -> Result<usize, SeoError> {
        let mut document = self.load_or_empty().await;
        let mut changed = 0;

        for route in &mut document.routes {
            let Some(edit) = edits.iter().find(|edit| edit.path == route.path) else {
                continue;
            };
            let before = (route.title.clone(), route.description.clone());
            if let Some(title) = &edit.title {
                route.title = title.clone();
            }
            if let Some(description) = &edit.description {
                route.description = description.clone();
            }
            if before != (route.title.clone(), route.description.clone()) {
                changed += 1;
            }
        }

        self.store.save(&document).await?;
        info!(changed, "seo routes updated");
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mmds_storage::InMemoryStore;
    use std::sync::Arc;

    fn seeded() -> Arc<InMemoryStore<SeoDocument>> {
        Arc::new(InMemoryStore::new(SeoDocument::new(vec![
            SeoRoute::new("/", "Trang chủ", "Mô tả"),
            SeoRoute::new("/cong-ty", "Công ty", "Giới thiệu"),
        ])))
    }

    #[tokio::test]
    async fn update_changes_only_supplied_fields() {
        let store = seeded();
        let repo = SeoRouteRepository::new(store.clone());

        let changed = repo
            .update(&[SeoEdit {
                path: "/cong-ty".to_string(),
                title: Some("Về chúng tôi".to_string()),
                description: None,
            }])
            .await
            .unwrap();

        assert_eq!(changed, 1);
        let routes = repo.routes().await;
        assert_eq!(routes[1].title, "Về chúng tôi");
        assert_eq!(routes[1].description, "Giới thiệu");
        assert_eq!(routes[0].title, "Trang chủ");
    }

    #[tokio::test]
    async fn unknown_paths_never_add_entries() {
        let store = seeded();
        let repo = SeoRouteRepository::new(store.clone());

        let changed = repo
            .update(&[SeoEdit {
                path: "/moi".to_string(),
                title: Some("Mới".to_string()),
                description: Some("Mới".to_string()),
            }])
            .await
            .unwrap();

        assert_eq!(changed, 0);
        assert_eq!(repo.routes().await.len(), 2);
        // the document is still rewritten
        assert_eq!(store.write_count(), 1);
    }

    #[tokio::test]
    async fn unreadable_document_lists_as_empty() {
        let repo = SeoRouteRepository::new(InMemoryStore::<SeoDocument>::unavailable());
        assert!(repo.routes().await.is_empty());
    }
}
