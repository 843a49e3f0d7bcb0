use crate::error::{ContactError, Result};
use crate::message::ContactMessage;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, info};
use typed_builder::TypedBuilder;

/// Delivers composed contact messages.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    async fn send(&self, message: &ContactMessage) -> Result<()>;
}

/// Connection settings for [`SmtpMailer`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct SmtpSettings {
    #[builder(setter(into))]
    pub host: String,
    #[builder(default = 587)]
    pub port: u16,
    /// Login user, also used as the sender address.
    #[builder(setter(into))]
    pub username: String,
    #[builder(setter(into))]
    pub password: String,
    /// Where consultation requests are delivered.
    #[builder(setter(into))]
    pub recipient: String,
}

/// Sends messages through an SMTP relay: implicit TLS on port 465,
/// STARTTLS on any other port.
#[derive(Clone)]
pub struct SmtpMailer {
    from: Mailbox,
    to: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(settings: SmtpSettings) -> Result<Self> {
        let from: Mailbox = settings
            .username
            .parse()
            .map_err(|e| ContactError::Address(format!("{}: {e}", settings.username)))?;
        let to: Mailbox = settings
            .recipient
            .parse()
            .map_err(|e| ContactError::Address(format!("{}: {e}", settings.recipient)))?;

        let builder = if settings.port == 465 {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
        }
        .map_err(|e| ContactError::Transport(format!("{}: {e}", settings.host)))?;

        let transport = builder
            .port(settings.port)
            .credentials(Credentials::new(settings.username, settings.password))
            .build();

        info!(host = %settings.host, port = settings.port, "smtp mailer configured");
        Ok(Self { from, to, transport })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &ContactMessage) -> Result<()> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(message.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(message.html.clone())
            .map_err(|e| ContactError::Build(e.to_string()))?;

        let response = self
            .transport
            .send(email)
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?;

        debug!(code = %response.code(), "contact email accepted by relay");
        Ok(())
    }
}
