//! Repository for the `cms_menus` table.
//!
//! Navigation is stored as one row per named list. Each list falls back
//! to its built-in default independently, so a corrupt footer never takes
//! the header down with it.

use sqlx::PgPool;
use stylen_core::defaults::default_menus;
use stylen_core::menu::{MenuItem, MenuStructure};

use crate::models::menu::{MenuRow, MENU_FOOTER, MENU_HEADER};

/// Provides data access for navigation menus.
pub struct MenuRepo;

impl MenuRepo {
    /// Fetch both navigation lists, degrading per-list to defaults when a
    /// row is missing or malformed.
    pub async fn get(pool: &PgPool) -> MenuStructure {
        let defaults = default_menus();
        let rows = sqlx::query_as::<_, MenuRow>("SELECT name, items FROM cms_menus")
            .fetch_all(pool)
            .await;

        let rows = match rows {
            Ok(rows) => rows,
            Err(err) => {
                tracing::warn!(error = %err, "menu read failed, serving defaults");
                return defaults;
            }
        };

        let mut header = None;
        let mut footer = None;
        for row in rows {
            match row.name.as_str() {
                MENU_HEADER => header = row.into_items(),
                MENU_FOOTER => footer = row.into_items(),
                other => tracing::warn!(name = other, "ignoring unknown menu list"),
            }
        }

        MenuStructure {
            header: header.unwrap_or(defaults.header),
            footer: footer.unwrap_or(defaults.footer),
        }
    }

    /// Replace both navigation lists.
    pub async fn save(pool: &PgPool, menus: &MenuStructure) -> Result<(), sqlx::Error> {
        Self::save_list(pool, MENU_HEADER, &menus.header).await?;
        Self::save_list(pool, MENU_FOOTER, &menus.footer).await?;
        Ok(())
    }

    async fn save_list(pool: &PgPool, name: &str, items: &[MenuItem]) -> Result<(), sqlx::Error> {
        let items = serde_json::to_value(items).unwrap_or_else(|_| serde_json::json!([]));
        sqlx::query(
            "INSERT INTO cms_menus (name, items) VALUES ($1, $2) \
             ON CONFLICT (name) DO UPDATE SET items = EXCLUDED.items",
        )
        .bind(name)
        .bind(items)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Row count, used by the seeder.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM cms_menus")
            .fetch_one(pool)
            .await
    }
}
