//! Zapier webhook delivery with exponential-backoff retry.
//!
//! Posts a flat JSON payload of the lead to the configured catch-all
//! webhook URL. Failed attempts are retried up to three times with
//! exponential backoff (1 s, 2 s, 4 s).

use std::time::Duration;

use stylen_core::lead::Lead;

/// Retry delays in seconds (exponential backoff: 1s, 2s, 4s).
const RETRY_DELAYS_SECS: [u64; 3] = [1, 2, 4];

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// `source` field stamped on every webhook payload so downstream zaps can
/// tell this site's leads apart.
const LEAD_SOURCE: &str = "StylenSurface Website";

/// Error type for webhook delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server returned a non-2xx status code.
    #[error("Webhook returned HTTP {0}")]
    HttpStatus(u16),
}

/// Delivers lead payloads to the configured webhook endpoint.
pub struct WebhookDelivery {
    client: reqwest::Client,
}

impl WebhookDelivery {
    /// Create a new delivery service with a pre-configured HTTP client.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client }
    }

    /// Deliver a lead to a webhook URL with retry.
    ///
    /// Retries up to 3 times with exponential backoff before giving up.
    /// Returns `Ok(())` on the first successful attempt.
    pub async fn deliver(&self, url: &str, lead: &Lead) -> Result<(), WebhookError> {
        let payload = payload_for(lead);

        let mut last_err: Option<WebhookError> = None;

        for (attempt, delay_secs) in RETRY_DELAYS_SECS.iter().enumerate() {
            match self.try_send(url, &payload).await {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::warn!(
                        attempt = attempt + 1,
                        url,
                        error = %e,
                        "webhook delivery attempt failed, retrying"
                    );
                    last_err = Some(e);
                    tokio::time::sleep(Duration::from_secs(*delay_secs)).await;
                }
            }
        }

        // Final attempt after the last backoff.
        match self.try_send(url, &payload).await {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::error!(url, error = %e, "webhook delivery failed after all retries");
                Err(last_err.unwrap_or(e))
            }
        }
    }

    /// Execute a single POST request and check the response status.
    async fn try_send(&self, url: &str, payload: &serde_json::Value) -> Result<(), WebhookError> {
        let response = self.client.post(url).json(payload).send().await?;
        if !response.status().is_success() {
            return Err(WebhookError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

impl Default for WebhookDelivery {
    fn default() -> Self {
        Self::new()
    }
}

fn payload_for(lead: &Lead) -> serde_json::Value {
    serde_json::json!({
        "fullName": lead.full_name,
        "phone": lead.phone,
        "userType": lead.user_type,
        "requirement": lead.requirement,
        "source": LEAD_SOURCE,
        "timestamp": lead.created_at.to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_source_and_timestamp() {
        let lead = Lead {
            id: uuid::Uuid::new_v4(),
            full_name: "A Builder".into(),
            phone: "+91 91234 56789".into(),
            user_type: "fabricator".into(),
            requirement: "foam board, 50 sheets".into(),
            created_at: chrono::Utc::now(),
        };
        let payload = payload_for(&lead);
        assert_eq!(payload["source"], LEAD_SOURCE);
        assert_eq!(payload["fullName"], "A Builder");
        assert!(payload["timestamp"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn webhook_error_display_http_status() {
        let err = WebhookError::HttpStatus(502);
        assert_eq!(err.to_string(), "Webhook returned HTTP 502");
    }
}
