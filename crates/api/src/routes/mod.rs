pub mod auth;
pub mod health;
pub mod leads;
pub mod media;
pub mod menus;
pub mod pages;
pub mod products;
pub mod settings;
pub mod site;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
///
/// /site/resolve?path=...               resolve a path to page content
/// /site/bootstrap                      public settings + menus
/// /site/products                       public catalog
/// /site/products/{slug}                single product
///
/// /leads                               submit a lead (public POST)
///
/// /admin/pages                         list, create
/// /admin/pages/{id}                    get, update, delete
/// /admin/pages/{id}/duplicate          duplicate (POST)
/// /admin/pages/{id}/sections/{slot}    upsert one section (PUT)
///
/// /admin/products                      list, upsert
/// /admin/products/{id}                 delete
///
/// /admin/menus                         get, update
/// /admin/settings                      get, update
///
/// /admin/media                         list, register
/// /admin/media/{id}                    delete
///
/// /admin/leads                         list captured leads
/// /admin/seed                          plant demo content (POST)
/// /admin/zoho/exchange-code            obtain Zoho refresh token (POST)
/// ```
///
/// Everything under `/admin` requires a valid session token; the check
/// lives in the [`crate::middleware::auth::AdminSession`] extractor each
/// admin handler takes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/site", site::router())
        .merge(leads::public_router())
        .nest("/admin/pages", pages::router())
        .nest("/admin/products", products::router())
        .nest("/admin/menus", menus::router())
        .nest("/admin/settings", settings::router())
        .nest("/admin/media", media::router())
        .merge(leads::admin_router())
        .route("/admin/seed", post(handlers::seed::run_seed))
        .route(
            "/admin/zoho/exchange-code",
            post(handlers::zoho::exchange_code),
        )
}
