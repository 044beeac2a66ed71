//! Admin page routes mounted at `/admin/pages`.
//!
//! ```text
//! GET    /                       -> list_pages
//! POST   /                       -> create_page
//! GET    /{id}                   -> get_page
//! PUT    /{id}                   -> update_page
//! DELETE /{id}                   -> delete_page
//! POST   /{id}/duplicate         -> duplicate_page
//! PUT    /{id}/sections/{slot}   -> upsert_page_section
//! ```

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::list_pages).post(pages::create_page))
        .route(
            "/{id}",
            get(pages::get_page)
                .put(pages::update_page)
                .delete(pages::delete_page),
        )
        .route("/{id}/duplicate", post(pages::duplicate_page))
        .route("/{id}/sections/{slot}", put(pages::upsert_page_section))
}
