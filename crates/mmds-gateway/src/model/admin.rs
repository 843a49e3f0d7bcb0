use std::collections::{BTreeMap, HashMap};

use mmds_core::{Article, SeoMeta, SeoRoute};
use mmds_seo::SeoEdit;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ArticleListResponse {
    pub seo: SeoMeta,
    pub articles: Vec<Article>,
}

#[derive(Debug, Serialize)]
pub struct SeoRoutesResponse {
    pub seo: SeoMeta,
    pub routes: Vec<SeoRoute>,
}

#[derive(Debug, Serialize)]
pub struct SeoUpdateResponse {
    pub changed: usize,
    pub message: &'static str,
}

/// Turns the admin SEO form into edits.
///
/// The form posts one `<path>_title` and one `<path>_description` field per
/// entry. Blank values leave the stored text alone.
pub fn seo_edits_from_form(form: &HashMap<String, String>) -> Vec<SeoEdit> {
    let mut edits: BTreeMap<&str, SeoEdit> = BTreeMap::new();

    for (key, value) in form {
        if value.is_empty() {
            continue;
        }
        if let Some(path) = key.strip_suffix("_title") {
            edits
                .entry(path)
                .or_insert_with(|| SeoEdit {
                    path: path.to_string(),
                    ..Default::default()
                })
                .title = Some(value.clone());
        } else if let Some(path) = key.strip_suffix("_description") {
            edits
                .entry(path)
                .or_insert_with(|| SeoEdit {
                    path: path.to_string(),
                    ..Default::default()
                })
                .description = Some(value.clone());
        }
    }

    edits.into_values().collect()
}
