mod admin;
mod contact;
mod health;
mod news;
mod pages;
mod sitemap;

pub use admin::{
    create_article_handler, delete_article_handler, get_article_handler, list_articles_handler,
    list_seo_handler, update_article_handler, update_seo_handler,
};
pub use contact::send_email_handler;
pub use health::health_handler;
pub use news::{news_detail_handler, news_list_handler};
pub use pages::{company_handler, guide_handler, home_handler};
pub use sitemap::sitemap_handler;
