use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Requests under this prefix skip SEO resolution and carry
/// [`SeoConfig::admin_meta`](mmds_seo::SeoConfig::admin_meta) instead.
pub const ADMIN_PREFIX: &str = "/admin";

/// Resolves the request path to [`SeoMeta`](mmds_core::SeoMeta) and stores it in the request
/// extensions for the page handlers.
pub async fn resolve_seo(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let path = request.uri().path();
    let meta = if path.starts_with(ADMIN_PREFIX) {
        state.seo.config().admin_meta.clone()
    } else {
        state.seo.resolve(path).await
    };

    request.extensions_mut().insert(meta);
    next.run(request).await
}

/// Lets the request through only with `Authorization: Bearer <admin token>`.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match (state.admin_token.as_deref(), token) {
        (Some(expected), Some(given)) if expected == given => Ok(next.run(request).await),
        _ => {
            warn!(path = %request.uri().path(), "rejected admin request");
            Err(AppError::Unauthorized)
        }
    }
}
