//! Admin demo-content seeding.

use axum::extract::State;
use axum::Json;
use stylen_db::repositories::{SeedReport, Seeder};

use crate::error::AppResult;
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/admin/seed
///
/// Plant demo content into whichever collections are empty. Safe to call
/// repeatedly; already-populated collections are never touched.
pub async fn run_seed(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<SeedReport>>> {
    let report = Seeder::run(&state.pool).await?;
    Ok(Json(DataResponse { data: report }))
}
