//! Repository for the `cms_settings` singleton.
//!
//! The table holds at most one meaningful row. Reads merge whatever is
//! stored over the built-in defaults and never fail; writes locate the
//! existing row and replace it, inserting one when the table is empty.

use sqlx::PgPool;
use stylen_core::defaults::default_settings;
use stylen_core::settings::GlobalSettings;
use stylen_core::types::EntityId;

use crate::models::settings::SettingsRow;

/// Column list for `cms_settings` queries.
const COLUMNS: &str = "\
    id, site_name, phone, email, address, logo_url, whatsapp, \
    scripts, integrations, updated_at";

/// Provides data access for global site settings.
pub struct SettingsRepo;

impl SettingsRepo {
    /// Fetch the settings, merged over defaults. A missing row or a
    /// failed query degrades to the full defaults.
    pub async fn get(pool: &PgPool) -> GlobalSettings {
        let query = format!("SELECT {COLUMNS} FROM cms_settings LIMIT 1");
        match sqlx::query_as::<_, SettingsRow>(&query)
            .fetch_optional(pool)
            .await
        {
            Ok(Some(row)) => row.into_settings(),
            Ok(None) => default_settings(),
            Err(err) => {
                tracing::warn!(error = %err, "settings read failed, serving defaults");
                default_settings()
            }
        }
    }

    /// Replace the singleton row with the given settings, creating it on
    /// first save.
    pub async fn save(pool: &PgPool, settings: &GlobalSettings) -> Result<(), sqlx::Error> {
        let existing: Option<EntityId> = sqlx::query_scalar("SELECT id FROM cms_settings LIMIT 1")
            .fetch_optional(pool)
            .await?;

        let scripts = serde_json::to_value(&settings.scripts)
            .unwrap_or_else(|_| serde_json::json!({}));
        let integrations = serde_json::to_value(&settings.integrations)
            .unwrap_or_else(|_| serde_json::json!({}));

        match existing {
            Some(id) => {
                sqlx::query(
                    "UPDATE cms_settings SET \
                         site_name = $2, phone = $3, email = $4, address = $5, \
                         logo_url = $6, whatsapp = $7, scripts = $8, \
                         integrations = $9, updated_at = NOW() \
                     WHERE id = $1",
                )
                .bind(id)
                .bind(&settings.site_name)
                .bind(&settings.phone)
                .bind(&settings.email)
                .bind(&settings.address)
                .bind(&settings.logo_url)
                .bind(&settings.whatsapp)
                .bind(&scripts)
                .bind(&integrations)
                .execute(pool)
                .await?;
            }
            None => {
                sqlx::query(
                    "INSERT INTO cms_settings \
                         (id, site_name, phone, email, address, logo_url, whatsapp, \
                          scripts, integrations, updated_at) \
                     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW())",
                )
                .bind(EntityId::new_v4())
                .bind(&settings.site_name)
                .bind(&settings.phone)
                .bind(&settings.email)
                .bind(&settings.address)
                .bind(&settings.logo_url)
                .bind(&settings.whatsapp)
                .bind(&scripts)
                .bind(&integrations)
                .execute(pool)
                .await?;
            }
        }
        Ok(())
    }

    /// Whether a settings row exists, used by the seeder.
    pub async fn exists(pool: &PgPool) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cms_settings")
            .fetch_one(pool)
            .await?;
        Ok(count > 0)
    }
}
