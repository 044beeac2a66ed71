//! Admin global settings management.
//!
//! Unlike the public bootstrap endpoint, these handlers expose the full
//! settings document, integration credentials included.

use axum::extract::State;
use axum::Json;
use stylen_core::settings::GlobalSettings;
use stylen_db::repositories::SettingsRepo;

use crate::error::AppResult;
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/settings
pub async fn get_settings(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Json<DataResponse<GlobalSettings>> {
    let settings = SettingsRepo::get(&state.pool).await;
    Json(DataResponse { data: settings })
}

/// PUT /api/v1/admin/settings
///
/// Replace the settings document wholesale.
pub async fn update_settings(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(settings): Json<GlobalSettings>,
) -> AppResult<Json<DataResponse<GlobalSettings>>> {
    SettingsRepo::save(&state.pool, &settings).await?;
    tracing::info!(site_name = %settings.site_name, "settings updated");
    Ok(Json(DataResponse { data: settings }))
}
