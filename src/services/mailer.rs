use std::sync::LazyLock;

use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::{Credentials, Mechanism};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use regex::Regex;

use crate::config::MailCredentials;

pub const SMTP_RELAY_HOST: &str = "smtp.gmail.com";
pub const SMTP_RELAY_PORT: u16 = 587;
pub const LETTER_SUBJECT: &str = "Your Prolet Letter";

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

/// Basic `user@domain.tld` shape check. The relay has the final word.
pub fn is_valid_address(address: &str) -> bool {
    EMAIL_SHAPE.is_match(address)
}

/// Delivers a plain-text letter to one recipient.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_letter(&self, to: &str, letter: &str) -> Result<()>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(credentials: &MailCredentials) -> Result<Self> {
        let from = credentials
            .username
            .parse::<Mailbox>()
            .context("MAIL_USERNAME is not a valid address")?;

        let creds = Credentials::new(
            credentials.username.clone(),
            credentials.app_password.clone(),
        );

        // Built without the pool feature: each send opens and closes its own session.
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(SMTP_RELAY_HOST)
            .context("Failed to create SMTP transport")?
            .port(SMTP_RELAY_PORT)
            .credentials(creds)
            .authentication(vec![Mechanism::Plain, Mechanism::Login])
            .build();

        Ok(Self { transport, from })
    }
}

pub fn build_letter_message(from: &Mailbox, to: &str, letter: &str) -> Result<Message> {
    let to_mailbox = to
        .parse::<Mailbox>()
        .with_context(|| format!("Invalid recipient address: {}", to))?;

    Message::builder()
        .from(from.clone())
        .to(to_mailbox)
        .subject(LETTER_SUBJECT)
        .header(ContentType::TEXT_PLAIN)
        .body(letter.to_string())
        .context("Failed to build email message")
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_letter(&self, to: &str, letter: &str) -> Result<()> {
        let message = build_letter_message(&self.from, to, letter)?;

        self.transport
            .send(message)
            .await
            .context("Failed to send email")?;

        tracing::info!("Letter sent to {}", to);
        Ok(())
    }
}
