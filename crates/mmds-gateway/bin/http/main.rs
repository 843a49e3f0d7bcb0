mod cli;

use std::sync::Arc;

use crate::cli::CLI;
use clap::Parser;
use mmds_contact::{Mailer, SmtpMailer, SmtpSettings};
use mmds_core::{ArticleDocument, SeoDocument};
use mmds_gateway::{App, AppSettings, AppState, ArticleStore, SeoStore};
use mmds_storage::JsonFileStore;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CLI::try_parse()?;
    init_tracing(config.log_json);

    info!(
        listen_addr = %config.listen_addr,
        articles_path = %config.articles_path.display(),
        seo_path = %config.seo_path.display(),
        base_url = %config.base_url,
        "starting mmds gateway"
    );

    if config.admin_token.is_none() {
        warn!("no admin token configured, admin routes are disabled");
    }

    let mailer = build_mailer(&config)?;
    let articles: ArticleStore = Arc::new(JsonFileStore::<ArticleDocument>::new(&config.articles_path));
    let seo: SeoStore = Arc::new(JsonFileStore::<SeoDocument>::new(&config.seo_path));

    let settings = AppSettings::builder()
        .base_url(config.base_url)
        .admin_token(config.admin_token)
        .mailer(mailer)
        .build();
    let app = App::router(AppState::new(articles, seo, settings));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_mailer(config: &CLI) -> Result<Option<Arc<dyn Mailer>>, Box<dyn std::error::Error>> {
    let (Some(host), Some(user), Some(recipient)) = (
        config.smtp_host.as_deref(),
        config.smtp_user.as_deref(),
        config.mail_recipient.as_deref(),
    ) else {
        warn!("smtp is not fully configured, contact form delivery is disabled");
        return Ok(None);
    };

    let settings = SmtpSettings::builder()
        .host(host)
        .port(config.smtp_port)
        .username(user)
        .password(config.smtp_pass.as_str())
        .recipient(recipient)
        .build();

    Ok(Some(Arc::new(SmtpMailer::new(settings)?)))
}
