//! `cms_media` row model.
//!
//! The media library stores URL references only; upload encoding is the
//! client's concern.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stylen_core::types::{EntityId, Timestamp};

/// A row from the `cms_media` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRow {
    pub id: EntityId,
    pub url: String,
    pub name: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub created_at: Timestamp,
}

/// DTO for registering a new media item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMedia {
    pub url: String,
    pub name: String,
    #[serde(rename = "type", default = "default_media_type")]
    pub media_type: String,
}

fn default_media_type() -> String {
    "image".to_string()
}
