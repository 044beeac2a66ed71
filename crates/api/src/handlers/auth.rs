//! Admin login handler.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use stylen_core::error::CoreError;

use crate::auth::jwt::generate_session_token;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Bearer token for subsequent `/admin` requests.
    pub token: String,
    /// Seconds until the token expires.
    pub expires_in_secs: i64,
}

/// POST /api/v1/auth/login
///
/// Exchange the shared admin password for a session token. There is one
/// admin identity; a wrong password gets a 401 with no further detail.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<LoginResponse>>> {
    if input.password != state.config.admin_password {
        tracing::warn!("admin login rejected");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }

    let token = generate_session_token(&state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("token generation failed: {e}")))?;

    tracing::info!("admin login succeeded");
    Ok(Json(DataResponse {
        data: LoginResponse {
            token,
            expires_in_secs: state.config.jwt.session_expiry_hours * 3600,
        },
    }))
}
