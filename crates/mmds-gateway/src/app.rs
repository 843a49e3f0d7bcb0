use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    company_handler, create_article_handler, delete_article_handler, get_article_handler,
    guide_handler, health_handler, home_handler, list_articles_handler, list_seo_handler,
    news_detail_handler, news_list_handler, send_email_handler, sitemap_handler,
    update_article_handler, update_seo_handler,
};
use crate::middleware::{require_admin, resolve_seo, ADMIN_PREFIX};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        let admin = Router::new()
            .route(
                "/news",
                get(list_articles_handler).post(create_article_handler),
            )
            .route(
                "/news/{id}",
                get(get_article_handler)
                    .put(update_article_handler)
                    .delete(delete_article_handler),
            )
            .route("/seo", get(list_seo_handler).post(update_seo_handler))
            .route_layer(from_fn_with_state(state.clone(), require_admin));

        Router::new()
            .route("/health", get(health_handler))
            .route("/", get(home_handler))
            .route("/huong-dan", get(guide_handler))
            .route("/cong-ty", get(company_handler))
            .route("/tin-tuc", get(news_list_handler))
            .route("/tin-tuc/{article_link}", get(news_detail_handler))
            .route("/sitemap.xml", get(sitemap_handler))
            .route("/send-email", post(send_email_handler))
            .nest(ADMIN_PREFIX, admin)
            .layer(from_fn_with_state(state.clone(), resolve_seo))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
