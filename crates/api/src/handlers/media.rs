//! Admin media library management.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use stylen_core::error::CoreError;
use stylen_core::types::EntityId;
use stylen_db::models::media::{MediaRow, NewMedia};
use stylen_db::repositories::MediaRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/media
pub async fn list_media(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<MediaRow>>>> {
    let media = MediaRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: media }))
}

/// POST /api/v1/admin/media
///
/// Register a media URL in the library.
pub async fn create_media(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<NewMedia>,
) -> AppResult<impl IntoResponse> {
    if input.url.trim().is_empty() {
        return Err(CoreError::Validation("media url must not be empty".into()).into());
    }
    let media = MediaRepo::insert(&state.pool, &input).await?;
    tracing::info!(media_id = %media.id, "media registered");
    Ok((StatusCode::CREATED, Json(DataResponse { data: media })))
}

/// DELETE /api/v1/admin/media/{id}
pub async fn delete_media(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    if !MediaRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Media", id }));
    }
    tracing::info!(media_id = %id, "media deleted");
    Ok(StatusCode::NO_CONTENT)
}
