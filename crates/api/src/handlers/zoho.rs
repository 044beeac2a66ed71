//! Admin Zoho self-client onboarding.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use stylen_core::settings::ZohoDomain;
use stylen_relay::ZohoClient;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeCodeRequest {
    #[serde(default)]
    pub domain: ZohoDomain,
    pub client_id: String,
    pub client_secret: String,
    /// Short-lived authorization code generated in the Zoho API console.
    pub code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeCodeResponse {
    /// Long-lived refresh token to store in the integration settings.
    pub refresh_token: String,
}

/// POST /api/v1/admin/zoho/exchange-code
///
/// One-time exchange of a Zoho self-client authorization code for the
/// long-lived refresh token the relay needs. The admin pastes the
/// returned token into the integration settings.
pub async fn exchange_code(
    _session: AdminSession,
    State(_state): State<AppState>,
    Json(input): Json<ExchangeCodeRequest>,
) -> AppResult<Json<DataResponse<ExchangeCodeResponse>>> {
    let tokens = ZohoClient::new()
        .exchange_auth_code(input.domain, &input.client_id, &input.client_secret, &input.code)
        .await
        .map_err(|e| AppError::BadRequest(format!("Zoho code exchange failed: {e}")))?;

    let refresh_token = tokens
        .refresh_token
        .ok_or_else(|| AppError::BadRequest("Zoho did not return a refresh token".into()))?;

    tracing::info!("Zoho refresh token obtained");
    Ok(Json(DataResponse {
        data: ExchangeCodeResponse { refresh_token },
    }))
}
