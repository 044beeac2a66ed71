//! Repository for the `cms_products` table.
//!
//! Catalog reads never fail: an empty table or a query error degrades to
//! the built-in demo catalog so the public site always has something to
//! show. Writes propagate a typed error instead.

use sqlx::PgPool;
use stylen_core::defaults::demo_catalog;
use stylen_core::error::CoreError;
use stylen_core::product::Product;
use stylen_core::types::EntityId;

use crate::models::product::ProductRow;

/// Column list for `cms_products` queries.
const COLUMNS: &str = "\
    id, name, slug, category, description, features, specs, \
    image, gallery, applications, is_featured";

/// Provides data access for catalog products.
pub struct ProductRepo;

impl ProductRepo {
    /// List the catalog. Falls back to the demo catalog when the table is
    /// empty or the query fails.
    pub async fn list(pool: &PgPool) -> Vec<Product> {
        let query = format!("SELECT {COLUMNS} FROM cms_products ORDER BY name ASC");
        match sqlx::query_as::<_, ProductRow>(&query).fetch_all(pool).await {
            Ok(rows) if !rows.is_empty() => {
                rows.into_iter().map(ProductRow::into_product).collect()
            }
            Ok(_) => demo_catalog(),
            Err(err) => {
                tracing::warn!(error = %err, "product list failed, serving demo catalog");
                demo_catalog()
            }
        }
    }

    /// Find a product by slug, searching the stored catalog first and the
    /// demo catalog second. Returns `None` only when neither has it.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Option<Product> {
        let query = format!("SELECT {COLUMNS} FROM cms_products WHERE slug = $1");
        match sqlx::query_as::<_, ProductRow>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
        {
            Ok(Some(row)) => Some(row.into_product()),
            Ok(None) => demo_catalog().into_iter().find(|p| p.slug == slug),
            Err(err) => {
                tracing::warn!(error = %err, slug, "product lookup failed, trying demo catalog");
                demo_catalog().into_iter().find(|p| p.slug == slug)
            }
        }
    }

    /// Insert or replace a product by ID. A slug collision with another
    /// product rejects the whole save.
    pub async fn save(pool: &PgPool, product: &Product) -> Result<Product, CoreError> {
        let row = ProductRow::from_product(product);
        let query = format!(
            "INSERT INTO cms_products \
                 (id, name, slug, category, description, features, specs, \
                  image, gallery, applications, is_featured) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             ON CONFLICT (id) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 slug = EXCLUDED.slug, \
                 category = EXCLUDED.category, \
                 description = EXCLUDED.description, \
                 features = EXCLUDED.features, \
                 specs = EXCLUDED.specs, \
                 image = EXCLUDED.image, \
                 gallery = EXCLUDED.gallery, \
                 applications = EXCLUDED.applications, \
                 is_featured = EXCLUDED.is_featured \
             RETURNING {COLUMNS}"
        );
        let saved = sqlx::query_as::<_, ProductRow>(&query)
            .bind(row.id)
            .bind(&row.name)
            .bind(&row.slug)
            .bind(&row.category)
            .bind(&row.description)
            .bind(&row.features)
            .bind(&row.specs)
            .bind(&row.image)
            .bind(&row.gallery)
            .bind(&row.applications)
            .bind(row.is_featured)
            .fetch_one(pool)
            .await
            .map_err(|err| classify_save_error(err, &row.slug))?;
        Ok(saved.into_product())
    }

    /// Delete a product. Returns `false` when no row had that ID.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cms_products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Row count, used by the seeder to decide whether to plant the demo
    /// catalog.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM cms_products")
            .fetch_one(pool)
            .await
    }
}

fn classify_save_error(err: sqlx::Error, slug: &str) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return CoreError::Conflict(format!("a product with slug '{slug}' already exists"));
        }
    }
    CoreError::Internal(format!("product save failed: {err}"))
}
