//! Admin media routes mounted at `/admin/media`.
//!
//! ```text
//! GET    /       -> list_media
//! POST   /       -> create_media
//! DELETE /{id}   -> delete_media
//! ```

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(media::list_media).post(media::create_media))
        .route("/{id}", delete(media::delete_media))
}
