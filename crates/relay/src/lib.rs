//! Outbound lead relay.
//!
//! After a lead is persisted it is forwarded to whichever CRM channels
//! the stored integration settings enable:
//!
//! - [`WebhookDelivery`] — catch-all Zapier webhook POST with retry.
//! - [`ZohoClient`] — direct Zoho CRM record creation via OAuth refresh.
//! - [`LeadMailer`] — SMTP notification email.
//!
//! Relay runs strictly after persistence and every channel failure is
//! logged and swallowed; a flaky integration never loses a lead or fails
//! the submission.

pub mod email;
pub mod webhook;
pub mod zoho;

use stylen_core::lead::Lead;
use stylen_core::settings::CrmIntegrations;

pub use email::{EmailError, LeadMailer};
pub use webhook::{WebhookDelivery, WebhookError};
pub use zoho::{ZohoClient, ZohoError, ZohoTokens};

/// Per-channel outcome of one relay run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RelayOutcome {
    pub webhook_sent: bool,
    pub zoho_sent: bool,
    pub email_sent: bool,
}

/// Fans a stored lead out to the configured CRM channels.
pub struct LeadRelay {
    webhook: WebhookDelivery,
    zoho: ZohoClient,
    mailer: LeadMailer,
}

impl LeadRelay {
    pub fn new() -> Self {
        Self {
            webhook: WebhookDelivery::new(),
            zoho: ZohoClient::new(),
            mailer: LeadMailer::new(),
        }
    }

    /// Forward a lead to every enabled channel.
    ///
    /// Does nothing when the master auto-sync switch is off. Channels run
    /// independently; one failing does not stop the others, and no failure
    /// propagates to the caller.
    pub async fn relay(&self, lead: &Lead, integrations: &CrmIntegrations) -> RelayOutcome {
        let mut outcome = RelayOutcome::default();

        if !integrations.enable_auto_sync {
            tracing::debug!(lead_id = %lead.id, "auto-sync disabled, skipping relay");
            return outcome;
        }

        if !integrations.zapier_webhook.is_empty() {
            match self.webhook.deliver(&integrations.zapier_webhook, lead).await {
                Ok(()) => outcome.webhook_sent = true,
                Err(err) => {
                    tracing::error!(lead_id = %lead.id, error = %err, "webhook relay failed");
                }
            }
        }

        if integrations.zoho.enabled {
            match self.zoho.create_lead(&integrations.zoho, lead).await {
                Ok(()) => outcome.zoho_sent = true,
                Err(err) => {
                    tracing::error!(lead_id = %lead.id, error = %err, "zoho relay failed");
                }
            }
        }

        if integrations.smtp.enabled {
            match self.mailer.send(&integrations.smtp, lead).await {
                Ok(()) => outcome.email_sent = true,
                Err(err) => {
                    tracing::error!(lead_id = %lead.id, error = %err, "email relay failed");
                }
            }
        }

        tracing::info!(
            lead_id = %lead.id,
            webhook = outcome.webhook_sent,
            zoho = outcome.zoho_sent,
            email = outcome.email_sent,
            "lead relay finished"
        );
        outcome
    }
}

impl Default for LeadRelay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylen_core::settings::SmtpConfig;

    fn lead() -> Lead {
        Lead {
            id: uuid::Uuid::new_v4(),
            full_name: "Test Person".into(),
            phone: "+91 90000 00000".into(),
            user_type: "dealer".into(),
            requirement: "acrylic sheets".into(),
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn disabled_auto_sync_skips_every_channel() {
        let relay = LeadRelay::new();
        let integrations = CrmIntegrations {
            zapier_webhook: "https://hooks.zapier.com/x".into(),
            smtp: SmtpConfig {
                enabled: true,
                ..Default::default()
            },
            enable_auto_sync: false,
            ..Default::default()
        };
        let outcome = relay.relay(&lead(), &integrations).await;
        assert_eq!(outcome, RelayOutcome::default());
    }

    #[tokio::test]
    async fn no_channels_configured_is_a_no_op() {
        let relay = LeadRelay::new();
        let integrations = CrmIntegrations {
            enable_auto_sync: true,
            ..Default::default()
        };
        let outcome = relay.relay(&lead(), &integrations).await;
        assert_eq!(outcome, RelayOutcome::default());
    }
}
