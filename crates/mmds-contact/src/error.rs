use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContactError>;

#[derive(Debug, Clone, Error)]
pub enum ContactError {
    #[error("invalid mailbox address: {0}")]
    Address(String),
    #[error("failed to build email message: {0}")]
    Build(String),
    #[error("failed to send email: {0}")]
    Transport(String),
}
