use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const LISTEN_ADDR_ENV: &str = "MMDS_LISTEN_ADDR";
pub const ARTICLES_PATH_ENV: &str = "MMDS_ARTICLES_PATH";
pub const SEO_PATH_ENV: &str = "MMDS_SEO_PATH";
pub const BASE_URL_ENV: &str = "MMDS_BASE_URL";
pub const ADMIN_TOKEN_ENV: &str = "MMDS_ADMIN_TOKEN";
pub const SMTP_HOST_ENV: &str = "MMDS_SMTP_HOST";
pub const SMTP_PORT_ENV: &str = "MMDS_SMTP_PORT";
pub const SMTP_USER_ENV: &str = "MMDS_SMTP_USER";
pub const SMTP_PASS_ENV: &str = "MMDS_SMTP_PASS";
pub const MAIL_RECIPIENT_ENV: &str = "MMDS_MAIL_RECIPIENT";
pub const LOG_JSON_ENV: &str = "MMDS_LOG_JSON";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5200";
pub const DEFAULT_ARTICLES_PATH: &str = "news_data.json";
pub const DEFAULT_SEO_PATH: &str = "seo-data.json";
pub const DEFAULT_BASE_URL: &str = "https://mmds.vn";
pub const DEFAULT_SMTP_PORT: u16 = 587;

#[derive(Debug, Parser)]
#[command(name = "mmds-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(long, env = ARTICLES_PATH_ENV, default_value = DEFAULT_ARTICLES_PATH)]
    pub articles_path: PathBuf,

    #[arg(long, env = SEO_PATH_ENV, default_value = DEFAULT_SEO_PATH)]
    pub seo_path: PathBuf,

    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Bearer token for the admin API. Admin routes answer 401 without it.
    #[arg(long, env = ADMIN_TOKEN_ENV, hide_env_values = true)]
    pub admin_token: Option<String>,

    #[arg(long, env = SMTP_HOST_ENV)]
    pub smtp_host: Option<String>,

    #[arg(long, env = SMTP_PORT_ENV, default_value_t = DEFAULT_SMTP_PORT)]
    pub smtp_port: u16,

    #[arg(long, env = SMTP_USER_ENV)]
    pub smtp_user: Option<String>,

    #[arg(long, env = SMTP_PASS_ENV, hide_env_values = true, default_value = "")]
    pub smtp_pass: String,

    #[arg(long, env = MAIL_RECIPIENT_ENV)]
    pub mail_recipient: Option<String>,

    #[arg(long, env = LOG_JSON_ENV)]
    pub log_json: bool,
}
