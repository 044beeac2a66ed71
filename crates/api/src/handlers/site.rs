//! Public site handlers: page resolution, bootstrap data, and the
//! product catalog.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use stylen_core::menu::MenuStructure;
use stylen_core::page::Template;
use stylen_core::product::Product;
use stylen_core::render::{self, ResolvedPage};
use stylen_core::route::{classify_path, RouteTarget, StaticRoute};
use stylen_core::settings::GlobalSettings;
use stylen_db::repositories::{MenuRepo, PageRepo, ProductRepo, SettingsRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    /// Raw request path from the client router, e.g. `/acrylic-sheets-pune/`.
    pub path: String,
}

/// What a path resolves to.
///
/// `reserved` paths are rendered by the client's fixed screens (about,
/// contact, product detail); `page` carries a fully resolved CMS page.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResolveResponse {
    Reserved {
        #[serde(flatten)]
        route: StaticRoute,
    },
    Page {
        page: ResolvedPage,
    },
}

/// GET /api/v1/site/resolve?path=...
///
/// Resolve a request path to renderable content. Three outcomes are kept
/// distinct on purpose: an unknown slug is a 404, a database failure is a
/// 500, and the root path with no stored home page serves the built-in
/// home view rather than an error.
pub async fn resolve(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> AppResult<Json<DataResponse<ResolveResponse>>> {
    let slug = match classify_path(&query.path) {
        RouteTarget::Reserved(route) => {
            return Ok(Json(DataResponse {
                data: ResolveResponse::Reserved { route },
            }));
        }
        RouteTarget::Page(slug) => slug,
    };

    let page = match PageRepo::find_published_by_slug(&state.pool, &slug).await {
        Ok(page) => page,
        // The root must always render something; any other slug surfaces
        // the store failure so it is distinguishable from a plain miss.
        Err(err) if slug == "/" => {
            tracing::warn!(error = %err, "home lookup failed, serving built-in home");
            None
        }
        Err(err) => return Err(err.into()),
    };

    let resolved = match page {
        Some(page) => {
            // Product pages cross-reference the catalog for specs.
            let products = if page.template == Template::Product {
                ProductRepo::list(&state.pool).await
            } else {
                Vec::new()
            };
            render::dispatch(&page, &products)
        }
        None if slug == "/" => render::default_home_view(),
        None => {
            return Err(AppError::NotFound(format!("no published page at '{slug}'")));
        }
    };

    Ok(Json(DataResponse {
        data: ResolveResponse::Page { page: resolved },
    }))
}

/// Everything the client shell needs on first load.
#[derive(Debug, Serialize)]
pub struct BootstrapResponse {
    pub settings: GlobalSettings,
    pub menus: MenuStructure,
}

/// GET /api/v1/site/bootstrap
///
/// Site chrome in one round trip: public settings (credentials stripped,
/// injected scripts included) plus both navigation lists. Never fails;
/// both reads degrade to defaults.
pub async fn bootstrap(
    State(state): State<AppState>,
) -> Json<DataResponse<BootstrapResponse>> {
    let settings = SettingsRepo::get(&state.pool).await.public_view();
    let menus = MenuRepo::get(&state.pool).await;

    Json(DataResponse {
        data: BootstrapResponse { settings, menus },
    })
}

/// GET /api/v1/site/products
///
/// The public catalog. Falls back to the demo catalog when the store is
/// empty or unreachable.
pub async fn list_products(State(state): State<AppState>) -> Json<DataResponse<Vec<Product>>> {
    let products = ProductRepo::list(&state.pool).await;
    Json(DataResponse { data: products })
}

/// GET /api/v1/site/products/{slug}
pub async fn get_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<Product>>> {
    let product = ProductRepo::find_by_slug(&state.pool, &slug)
        .await
        .ok_or_else(|| AppError::NotFound(format!("no product with slug '{slug}'")))?;
    Ok(Json(DataResponse { data: product }))
}
