use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;

use crate::error::Result;
use crate::state::AppState;

pub async fn sitemap_handler(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let sitemap = state.sitemap.generate(&state.base_url).await?;
    Ok(([(CONTENT_TYPE, "application/xml")], sitemap.to_xml()))
}
