//! Direct Zoho CRM integration.
//!
//! Zoho's API is region-sharded: both the accounts host (token endpoints)
//! and the API host depend on the configured data-center domain. Access
//! tokens are short-lived, so every record push starts with a refresh-token
//! exchange; the long-lived refresh token itself is obtained once via
//! [`ZohoClient::exchange_auth_code`] from the admin panel.

use std::time::Duration;

use serde::Deserialize;
use stylen_core::lead::Lead;
use stylen_core::settings::{ZohoConfig, ZohoDomain};

/// HTTP request timeout for Zoho calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Error type for Zoho CRM failures.
#[derive(Debug, thiserror::Error)]
pub enum ZohoError {
    /// The underlying HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Zoho rejected the call (bad credentials, expired grant, etc.).
    #[error("Zoho returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The token response did not contain the expected fields.
    #[error("Zoho token response missing '{0}'")]
    MissingField(&'static str),
}

/// Token material returned by an authorization-code exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct ZohoTokens {
    pub access_token: String,
    /// Present only on the initial authorization-code grant.
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Pushes leads into Zoho CRM.
pub struct ZohoClient {
    client: reqwest::Client,
}

impl ZohoClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client }
    }

    /// Create a lead record in Zoho CRM, refreshing the access token first.
    pub async fn create_lead(&self, config: &ZohoConfig, lead: &Lead) -> Result<(), ZohoError> {
        let access_token = self.refresh_access_token(config).await?;

        let url = format!("{}/crm/v2/Leads", api_base(config.domain));
        let body = serde_json::json!({
            "data": [{
                "Last_Name": lead.full_name,
                "Phone": lead.phone,
                "Lead_Source": "Website",
                "Description": format!(
                    "User type: {}\nRequirement: {}",
                    lead.user_type, lead.requirement
                ),
            }]
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Zoho-oauthtoken {access_token}"))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ZohoError::Api {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        tracing::info!(lead_id = %lead.id, "lead pushed to Zoho CRM");
        Ok(())
    }

    /// Swap the stored refresh token for a short-lived access token.
    async fn refresh_access_token(&self, config: &ZohoConfig) -> Result<String, ZohoError> {
        let url = format!("{}/oauth/v2/token", accounts_base(config.domain));
        let response = self
            .client
            .post(&url)
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", config.refresh_token.as_str()),
                ("client_id", config.client_id.as_str()),
                ("client_secret", config.client_secret.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ZohoError::Api {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let tokens: ZohoTokens = response.json().await?;
        if tokens.access_token.is_empty() {
            return Err(ZohoError::MissingField("access_token"));
        }
        Ok(tokens.access_token)
    }

    /// One-time exchange of a self-client authorization code for a refresh
    /// token, driven from the admin integrations panel.
    pub async fn exchange_auth_code(
        &self,
        domain: ZohoDomain,
        client_id: &str,
        client_secret: &str,
        code: &str,
    ) -> Result<ZohoTokens, ZohoError> {
        let url = format!("{}/oauth/v2/token", accounts_base(domain));
        let response = self
            .client
            .post(&url)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("client_id", client_id),
                ("client_secret", client_secret),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ZohoError::Api {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let tokens: ZohoTokens = response.json().await?;
        if tokens.refresh_token.is_none() {
            return Err(ZohoError::MissingField("refresh_token"));
        }
        Ok(tokens)
    }
}

impl Default for ZohoClient {
    fn default() -> Self {
        Self::new()
    }
}

fn accounts_base(domain: ZohoDomain) -> String {
    format!("https://accounts.zoho.{}", domain.as_str())
}

fn api_base(domain: ZohoDomain) -> String {
    format!("https://www.zohoapis.{}", domain.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hosts_follow_the_data_center_domain() {
        assert_eq!(accounts_base(ZohoDomain::In), "https://accounts.zoho.in");
        assert_eq!(api_base(ZohoDomain::Com), "https://www.zohoapis.com");
        assert_eq!(api_base(ZohoDomain::Eu), "https://www.zohoapis.eu");
    }

    #[test]
    fn token_response_parses_without_refresh_token() {
        let tokens: ZohoTokens =
            serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
        assert_eq!(tokens.access_token, "abc");
        assert!(tokens.refresh_token.is_none());
    }
}
