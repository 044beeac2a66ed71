//! Admin navigation menu management.

use axum::extract::State;
use axum::Json;
use stylen_core::menu::MenuStructure;
use stylen_db::repositories::MenuRepo;

use crate::error::AppResult;
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/menus
pub async fn get_menus(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Json<DataResponse<MenuStructure>> {
    let menus = MenuRepo::get(&state.pool).await;
    Json(DataResponse { data: menus })
}

/// PUT /api/v1/admin/menus
///
/// Replace both navigation lists wholesale.
pub async fn update_menus(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(menus): Json<MenuStructure>,
) -> AppResult<Json<DataResponse<MenuStructure>>> {
    MenuRepo::save(&state.pool, &menus).await?;
    tracing::info!(
        header_items = menus.header.len(),
        footer_items = menus.footer.len(),
        "menus updated"
    );
    Ok(Json(DataResponse { data: menus }))
}
