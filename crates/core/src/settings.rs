//! Global site settings: contact details, injected scripts, and the
//! third-party lead-routing integration credentials.

use serde::{Deserialize, Serialize};

/// SMTP notification settings, as edited in the admin integrations panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmtpConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Sender account (e.g. a Gmail address).
    #[serde(default)]
    pub user: String,
    /// App password for the sender account.
    #[serde(default)]
    pub pass: String,
    /// Where lead notifications are delivered.
    #[serde(default)]
    pub to_email: String,
}

/// Zoho CRM data-center suffix (accounts.zoho.<domain>).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZohoDomain {
    Com,
    In,
    Eu,
    Au,
}

impl Default for ZohoDomain {
    fn default() -> Self {
        ZohoDomain::In
    }
}

impl ZohoDomain {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZohoDomain::Com => "com",
            ZohoDomain::In => "in",
            ZohoDomain::Eu => "eu",
            ZohoDomain::Au => "au",
        }
    }
}

/// Direct Zoho CRM integration credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZohoConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub domain: ZohoDomain,
}

/// Outbound lead-routing configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrmIntegrations {
    /// Catch-all webhook; fans out to Zoho / HubSpot / Wati via Zapier.
    #[serde(default)]
    pub zapier_webhook: String,
    #[serde(default)]
    pub zoho: ZohoConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
    /// Master switch: when off, no relay of any kind runs.
    #[serde(default)]
    pub enable_auto_sync: bool,
}

/// Free-text script blobs injected into the document head and footer.
///
/// Stored as configuration and handed to the client verbatim; there is no
/// parsing contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjectedScripts {
    #[serde(default)]
    pub header: String,
    #[serde(default)]
    pub footer: String,
}

/// Singleton site settings document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    pub site_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub whatsapp: String,
    #[serde(default)]
    pub scripts: InjectedScripts,
    #[serde(default)]
    pub integrations: CrmIntegrations,
}

impl GlobalSettings {
    /// A copy safe to expose on the public bootstrap endpoint: integration
    /// credentials are stripped, injected scripts and contact details stay.
    pub fn public_view(&self) -> GlobalSettings {
        GlobalSettings {
            integrations: CrmIntegrations::default(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    #[test]
    fn public_view_strips_credentials() {
        let mut settings = defaults::default_settings();
        settings.integrations.zoho.client_secret = "secret".into();
        settings.integrations.smtp.pass = "app-pass".into();
        settings.scripts.header = "<script>analytics()</script>".into();

        let public = settings.public_view();
        assert_eq!(public.integrations, CrmIntegrations::default());
        assert_eq!(public.scripts.header, "<script>analytics()</script>");
        assert_eq!(public.phone, settings.phone);
    }

    #[test]
    fn integrations_deserialize_with_missing_fields() {
        let integrations: CrmIntegrations =
            serde_json::from_value(serde_json::json!({"enableAutoSync": true})).unwrap();
        assert!(integrations.enable_auto_sync);
        assert!(!integrations.zoho.enabled);
        assert_eq!(integrations.zoho.domain, ZohoDomain::In);
    }
}
