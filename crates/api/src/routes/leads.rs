//! Lead routes.
//!
//! Two routers are provided:
//! - `public_router()` for the quote form POST mounted at `/leads`
//! - `admin_router()` for the admin listing mounted at `/admin/leads`

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::leads;
use crate::state::AppState;

/// Public lead intake.
///
/// ```text
/// POST /leads  -> submit_lead
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/leads", post(leads::submit_lead))
}

/// Admin lead listing.
///
/// ```text
/// GET /admin/leads  -> list_leads
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/admin/leads", get(leads::list_leads))
}
