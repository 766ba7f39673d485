//! Outbound mail — SMTP via lettre.
//!
//! The processor only sees the [`Mailer`] trait; the SMTP transport and
//! its configuration live here. Dispatch is fire-and-forget: a send
//! either succeeds or returns an error, nothing is retried.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use secrecy::{ExposeSecret, SecretString};
use tracing::info;

use crate::error::{ConfigError, MailError};

// ── Send request ────────────────────────────────────────────────────

/// A single outbound email send request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

// ── Mailer trait ────────────────────────────────────────────────────

/// Mail-sending collaborator.
///
/// One blocking call per email; no delivery confirmation beyond the
/// success/fail outcome.
pub trait Mailer: Send + Sync {
    fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}

// ── Configuration ───────────────────────────────────────────────────

/// SMTP transport configuration, built from environment variables.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: SecretString,
    pub from_address: String,
}

impl SmtpConfig {
    /// Build config from environment variables.
    ///
    /// `SMTP_HOST` is required; `SMTP_PORT` defaults to 587,
    /// `SMTP_FROM_ADDRESS` to the username.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("SMTP_HOST")
            .map_err(|_| ConfigError::MissingEnvVar("SMTP_HOST".into()))?;

        let port: u16 = match std::env::var("SMTP_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SMTP_PORT".into(),
                message: format!("not a port number: {raw:?}"),
            })?,
            Err(_) => 587,
        };

        let username = std::env::var("SMTP_USERNAME").unwrap_or_default();
        let password = SecretString::from(std::env::var("SMTP_PASSWORD").unwrap_or_default());
        let from_address = std::env::var("SMTP_FROM_ADDRESS").unwrap_or_else(|_| username.clone());

        Ok(Self {
            host,
            port,
            username,
            password,
            from_address,
        })
    }
}

// ── SMTP mailer ─────────────────────────────────────────────────────

/// Production mailer over lettre's blocking SMTP transport.
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let creds = Credentials::new(
            self.config.username.clone(),
            self.config.password.expose_secret().to_string(),
        );

        let transport = SmtpTransport::relay(&self.config.host)
            .map_err(|e| MailError::Transport(format!("SMTP relay error: {e}")))?
            .port(self.config.port)
            .credentials(creds)
            .build();

        let message = Message::builder()
            .from(
                self.config
                    .from_address
                    .parse()
                    .map_err(|e| MailError::InvalidAddress {
                        field: "from",
                        reason: format!("{e}"),
                    })?,
            )
            .to(email.to.parse().map_err(|e| MailError::InvalidAddress {
                field: "to",
                reason: format!("{e}"),
            })?)
            .subject(&email.subject)
            .header(ContentType::TEXT_HTML)
            .body(email.html_body.clone())
            .map_err(|e| MailError::Build(format!("{e}")))?;

        transport
            .send(&message)
            .map_err(|e| MailError::Transport(format!("SMTP send failed: {e}")))?;

        info!(to = %email.to, "Confirmation email sent");
        Ok(())
    }
}
