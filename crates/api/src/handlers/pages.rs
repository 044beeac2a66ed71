//! Admin page management: CRUD, duplication, and per-slot section edits.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::{Map, Value};
use stylen_core::defaults::starter_sections;
use stylen_core::error::CoreError;
use stylen_core::page::{Page, SeoData, Template};
use stylen_core::section::upsert_section;
use stylen_core::slug::{derive_slug, normalize_slug};
use stylen_core::types::EntityId;
use stylen_db::repositories::PageRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/pages
pub async fn list_pages(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Page>>>> {
    let pages = PageRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: pages }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageRequest {
    pub title: String,
    /// Optional; derived from the title when blank.
    #[serde(default)]
    pub slug: String,
    pub template: Template,
}

/// POST /api/v1/admin/pages
///
/// Create an unpublished page pre-filled with the starter sections for
/// its template, so the editor never opens on an empty canvas.
pub async fn create_page(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<CreatePageRequest>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(CoreError::Validation("title must not be empty".into()).into());
    }

    let slug = if input.slug.is_empty() {
        normalize_slug(&derive_slug(&input.title))
    } else {
        normalize_slug(&input.slug)
    };

    let page = Page {
        id: EntityId::new_v4(),
        slug,
        template: input.template,
        title: input.title.clone(),
        seo: SeoData {
            title: input.title,
            ..Default::default()
        },
        sections: starter_sections(input.template),
        is_published: false,
        updated_at: chrono::Utc::now(),
    };

    let saved = PageRepo::save(&state.pool, &page).await?;
    tracing::info!(page_id = %saved.id, slug = %saved.slug, "page created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: saved })))
}

/// GET /api/v1/admin/pages/{id}
pub async fn get_page(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<Page>>> {
    let page = PageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Page", id }))?;
    Ok(Json(DataResponse { data: page }))
}

/// PUT /api/v1/admin/pages/{id}
///
/// Replace a page wholesale. The path ID is authoritative; concurrent
/// editors are last-write-wins.
pub async fn update_page(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(mut page): Json<Page>,
) -> AppResult<Json<DataResponse<Page>>> {
    page.id = id;
    let saved = PageRepo::save(&state.pool, &page).await?;
    tracing::info!(page_id = %saved.id, slug = %saved.slug, "page updated");
    Ok(Json(DataResponse { data: saved }))
}

/// DELETE /api/v1/admin/pages/{id}
pub async fn delete_page(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    if !PageRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Page", id }));
    }
    tracing::info!(page_id = %id, "page deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/pages/{id}/duplicate
///
/// Copy a page under a new ID, unpublished, with ` (Copy)` / `-copy`
/// markers on the title and slug.
pub async fn duplicate_page(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let copy = PageRepo::duplicate(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Page", id }))?;
    tracing::info!(source_id = %id, copy_id = %copy.id, "page duplicated");
    Ok((StatusCode::CREATED, Json(DataResponse { data: copy })))
}

/// PUT /api/v1/admin/pages/{id}/sections/{slot}
///
/// Shallow-merge a patch into one section's content, creating the
/// section when the page does not have it yet. Sibling sections and
/// unpatched keys are untouched; array values are replaced wholesale.
pub async fn upsert_page_section(
    _session: AdminSession,
    State(state): State<AppState>,
    Path((id, slot)): Path<(EntityId, String)>,
    Json(patch): Json<Value>,
) -> AppResult<Json<DataResponse<Page>>> {
    let patch: Map<String, Value> = match patch {
        Value::Object(map) => map,
        _ => {
            return Err(AppError::BadRequest(
                "section patch must be a JSON object".into(),
            ));
        }
    };

    let mut page = PageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Page", id }))?;

    upsert_section(&mut page.sections, &slot, patch);

    let saved = PageRepo::save(&state.pool, &page).await?;
    tracing::info!(page_id = %id, slot = %slot, "page section upserted");
    Ok(Json(DataResponse { data: saved }))
}
