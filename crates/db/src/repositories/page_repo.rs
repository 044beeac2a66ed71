//! Repository for the `cms_pages` table.
//!
//! Pages are the unit of editing: reads tolerate malformed stored JSON
//! (the row model degrades field-by-field), writes propagate every error
//! so the caller can surface it.

use sqlx::PgPool;
use stylen_core::page::Page;
use stylen_core::slug::normalize_slug;
use stylen_core::types::EntityId;

use crate::models::page::PageRow;

/// Column list for `cms_pages` queries.
const COLUMNS: &str = "id, slug, template, title, seo, sections, is_published, updated_at";

/// Provides data access for CMS pages.
pub struct PageRepo;

impl PageRepo {
    /// List every page, oldest edit first. Used by the admin dashboard.
    pub async fn list(pool: &PgPool) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cms_pages ORDER BY updated_at ASC");
        let rows = sqlx::query_as::<_, PageRow>(&query).fetch_all(pool).await?;
        Ok(rows.into_iter().map(PageRow::into_page).collect())
    }

    /// Find a published page by slug. The slug is normalized before the
    /// lookup so `/about` and `about/` resolve to the same row.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Page>, sqlx::Error> {
        let slug = normalize_slug(slug);
        let query = format!(
            "SELECT {COLUMNS} FROM cms_pages WHERE slug = $1 AND is_published = TRUE"
        );
        let row = sqlx::query_as::<_, PageRow>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(PageRow::into_page))
    }

    /// Find a page by slug regardless of publication state. Drafts count:
    /// the seeder uses this so an operator's unpublished replacement at a
    /// slug still blocks re-seeding that slug.
    pub async fn find_any_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Page>, sqlx::Error> {
        let slug = normalize_slug(slug);
        let query = format!("SELECT {COLUMNS} FROM cms_pages WHERE slug = $1 LIMIT 1");
        let row = sqlx::query_as::<_, PageRow>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(PageRow::into_page))
    }

    /// Find a page by its ID regardless of publication state.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cms_pages WHERE id = $1");
        let row = sqlx::query_as::<_, PageRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(PageRow::into_page))
    }

    /// Insert or replace a page by ID, stamping `updated_at` with the
    /// current time. The stored slug is normalized on the way in.
    ///
    /// Uses `ON CONFLICT (id) DO UPDATE` so saving is an upsert; the
    /// partial unique index on published slugs still rejects two
    /// published pages sharing a slug.
    pub async fn save(pool: &PgPool, page: &Page) -> Result<Page, sqlx::Error> {
        let row = PageRow::from_page(page);
        let query = format!(
            "INSERT INTO cms_pages \
                 (id, slug, template, title, seo, sections, is_published, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, NOW()) \
             ON CONFLICT (id) DO UPDATE SET \
                 slug = EXCLUDED.slug, \
                 template = EXCLUDED.template, \
                 title = EXCLUDED.title, \
                 seo = EXCLUDED.seo, \
                 sections = EXCLUDED.sections, \
                 is_published = EXCLUDED.is_published, \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        let saved = sqlx::query_as::<_, PageRow>(&query)
            .bind(row.id)
            .bind(normalize_slug(&row.slug))
            .bind(&row.template)
            .bind(&row.title)
            .bind(&row.seo)
            .bind(&row.sections)
            .bind(row.is_published)
            .fetch_one(pool)
            .await?;
        Ok(saved.into_page())
    }

    /// Delete a page. Returns `false` when no row had that ID.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cms_pages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Copy a page under a fresh ID with ` (Copy)` appended to the title,
    /// `-copy` appended to the slug, and publication switched off so the
    /// copy never collides with the published original.
    pub async fn duplicate(pool: &PgPool, id: EntityId) -> Result<Option<Page>, sqlx::Error> {
        let Some(source) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let mut copy = source;
        copy.id = EntityId::new_v4();
        copy.title = format!("{} (Copy)", copy.title);
        copy.slug = format!("{}-copy", copy.slug);
        copy.is_published = false;

        Self::save(pool, &copy).await.map(Some)
    }
}
