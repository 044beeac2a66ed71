//! JWT-based admin-session extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use stylen_core::error::CoreError;

use crate::auth::jwt::{validate_token, ADMIN_SUBJECT};
use crate::error::AppError;
use crate::state::AppState;

/// Valid admin session extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler under `/admin`:
///
/// ```ignore
/// async fn my_handler(session: AdminSession) -> AppResult<Json<()>> {
///     tracing::info!(token_id = %session.token_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// The `jti` claim of the presented token, for audit logging.
    pub token_id: String,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        if claims.sub != ADMIN_SUBJECT {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin session required".into(),
            )));
        }

        Ok(AdminSession {
            token_id: claims.jti,
        })
    }
}
