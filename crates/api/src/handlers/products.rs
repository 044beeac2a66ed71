//! Admin product catalog management.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use stylen_core::error::CoreError;
use stylen_core::product::Product;
use stylen_core::types::EntityId;
use stylen_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/products
///
/// The same catalog the public site sees, demo fallback included, so the
/// admin panel shows exactly what visitors get.
pub async fn list_products(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<Product>>> {
    let products = ProductRepo::list(&state.pool).await;
    Json(DataResponse { data: products })
}

/// POST /api/v1/admin/products
///
/// Upsert a product by its embedded ID. A blank slug is derived from the
/// name; a slug collision rejects the whole save with a 409.
pub async fn save_product(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> AppResult<Json<DataResponse<Product>>> {
    if product.name.trim().is_empty() {
        return Err(CoreError::Validation("product name must not be empty".into()).into());
    }
    let saved = ProductRepo::save(&state.pool, &product).await?;
    tracing::info!(product_id = %saved.id, slug = %saved.slug, "product saved");
    Ok(Json(DataResponse { data: saved }))
}

/// DELETE /api/v1/admin/products/{id}
pub async fn delete_product(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    if !ProductRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }));
    }
    tracing::info!(product_id = %id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}
