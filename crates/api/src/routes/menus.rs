//! Admin menu routes mounted at `/admin/menus`.
//!
//! ```text
//! GET /  -> get_menus
//! PUT /  -> update_menus
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::menus;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(menus::get_menus).put(menus::update_menus))
}
