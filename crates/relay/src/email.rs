//! Lead notification email via SMTP.
//!
//! Unlike server-level mail setups, the credentials here come from the
//! stored integration settings (typically a Gmail address plus an app
//! password), so the transport is rebuilt per send.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use stylen_core::lead::Lead;
use stylen_core::settings::SmtpConfig;

/// SMTP relay host used for the stored-credential transport.
const SMTP_HOST: &str = "smtp.gmail.com";

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),

    /// Sender, password, or recipient is blank in the stored settings.
    #[error("SMTP settings incomplete: missing {0}")]
    Incomplete(&'static str),
}

/// Sends plain-text lead notifications using stored SMTP settings.
pub struct LeadMailer;

impl LeadMailer {
    pub fn new() -> Self {
        Self
    }

    /// Send a notification email for a freshly captured lead.
    pub async fn send(&self, config: &SmtpConfig, lead: &Lead) -> Result<(), EmailError> {
        if config.user.is_empty() {
            return Err(EmailError::Incomplete("user"));
        }
        if config.pass.is_empty() {
            return Err(EmailError::Incomplete("pass"));
        }
        if config.to_email.is_empty() {
            return Err(EmailError::Incomplete("toEmail"));
        }

        let subject = format!("New Lead: {}", lead.full_name);
        let body = format!(
            "Name: {}\nPhone: {}\nUser type: {}\nRequirement: {}\nReceived: {}",
            lead.full_name,
            lead.phone,
            lead.user_type,
            lead.requirement,
            lead.created_at.to_rfc3339(),
        );

        let email = Message::builder()
            .from(config.user.parse()?)
            .to(config.to_email.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| EmailError::Build(e.to_string()))?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(SMTP_HOST)?
            .credentials(Credentials::new(config.user.clone(), config.pass.clone()))
            .build();
        mailer.send(email).await?;

        tracing::info!(to = %config.to_email, lead_id = %lead.id, "lead notification email sent");
        Ok(())
    }
}

impl Default for LeadMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead() -> Lead {
        Lead {
            id: uuid::Uuid::new_v4(),
            full_name: "Test Person".into(),
            phone: "+91 90000 00000".into(),
            user_type: "end customer".into(),
            requirement: String::new(),
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn blank_credentials_are_rejected_before_any_network_call() {
        let mailer = LeadMailer::new();
        let config = SmtpConfig {
            enabled: true,
            ..Default::default()
        };
        let err = mailer.send(&config, &lead()).await.unwrap_err();
        assert!(matches!(err, EmailError::Incomplete("user")));
    }
}
