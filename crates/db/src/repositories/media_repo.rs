//! Repository for the `cms_media` table.

use sqlx::PgPool;
use stylen_core::types::EntityId;

use crate::models::media::{MediaRow, NewMedia};

/// Column list for `cms_media` queries.
const COLUMNS: &str = "id, url, name, media_type, created_at";

/// Provides data access for the media library.
pub struct MediaRepo;

impl MediaRepo {
    /// List media items, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<MediaRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cms_media ORDER BY created_at DESC");
        sqlx::query_as::<_, MediaRow>(&query).fetch_all(pool).await
    }

    /// Register a new media item.
    pub async fn insert(pool: &PgPool, media: &NewMedia) -> Result<MediaRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO cms_media (id, url, name, media_type, created_at) \
             VALUES ($1, $2, $3, $4, NOW()) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaRow>(&query)
            .bind(EntityId::new_v4())
            .bind(&media.url)
            .bind(&media.name)
            .bind(&media.media_type)
            .fetch_one(pool)
            .await
    }

    /// Remove a media item. Returns `false` when no row had that ID.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cms_media WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
