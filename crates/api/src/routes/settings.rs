//! Admin settings routes mounted at `/admin/settings`.
//!
//! ```text
//! GET /  -> get_settings
//! PUT /  -> update_settings
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(settings::get_settings).put(settings::update_settings),
    )
}
