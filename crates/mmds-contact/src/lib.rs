//! The consultation request form.
//!
//! A [`ContactRequest`] is turned into an HTML [`ContactMessage`] and handed
//! to a [`Mailer`]. [`SmtpMailer`] delivers over SMTP with lettre.

pub mod error;
pub mod mailer;
pub mod message;

pub use error::{ContactError, Result};
pub use mailer::{Mailer, SmtpMailer, SmtpSettings};
pub use message::{ContactMessage, ContactRequest};
