//! Lead intake and admin lead listing.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use stylen_core::lead::{Lead, NewLead};
use stylen_db::repositories::{LeadRepo, SettingsRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitLeadRequest {
    #[validate(length(min = 2, max = 120, message = "full name must be 2-120 characters"))]
    pub full_name: String,
    #[validate(length(min = 7, max = 20, message = "phone must be 7-20 characters"))]
    pub phone: String,
    #[validate(length(min = 1, max = 60, message = "user type is required"))]
    pub user_type: String,
    #[serde(default)]
    #[validate(length(max = 2000, message = "requirement is too long"))]
    pub requirement: String,
}

/// POST /api/v1/leads
///
/// Capture a quote request from the public form. The lead is persisted
/// first and only then relayed to the configured CRM channels in the
/// background, so a flaky integration never costs a submission.
pub async fn submit_lead(
    State(state): State<AppState>,
    Json(input): Json<SubmitLeadRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let new_lead = NewLead {
        full_name: input.full_name,
        phone: input.phone,
        user_type: input.user_type,
        requirement: input.requirement,
    };

    let lead = LeadRepo::insert(&state.pool, &new_lead).await?;
    tracing::info!(lead_id = %lead.id, "lead captured");

    // Relay off the request path; outcome is logged, never surfaced.
    let pool = state.pool.clone();
    let relay = Arc::clone(&state.relay);
    let stored = lead.clone();
    tokio::spawn(async move {
        let integrations = SettingsRepo::get(&pool).await.integrations;
        relay.relay(&stored, &integrations).await;
    });

    Ok((StatusCode::CREATED, Json(DataResponse { data: lead })))
}

/// GET /api/v1/admin/leads
///
/// All captured leads, newest first.
pub async fn list_leads(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Lead>>>> {
    let leads = LeadRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: leads }))
}
