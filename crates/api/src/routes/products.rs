//! Admin product routes mounted at `/admin/products`.
//!
//! ```text
//! GET    /       -> list_products
//! POST   /       -> save_product (upsert by embedded id)
//! DELETE /{id}   -> delete_product
//! ```

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(products::list_products).post(products::save_product),
        )
        .route("/{id}", delete(products::delete_product))
}
