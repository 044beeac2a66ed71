//! Public site routes mounted at `/site`.
//!
//! ```text
//! GET /resolve?path=...   -> resolve
//! GET /bootstrap          -> bootstrap
//! GET /products           -> list_products
//! GET /products/{slug}    -> get_product
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::site;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/resolve", get(site::resolve))
        .route("/bootstrap", get(site::bootstrap))
        .route("/products", get(site::list_products))
        .route("/products/{slug}", get(site::get_product))
}
