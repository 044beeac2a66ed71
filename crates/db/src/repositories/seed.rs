//! Idempotent demo-content seeding.
//!
//! Each collection is planted only when it is currently empty, so the
//! operator can trigger the seeder repeatedly without ever overwriting
//! edits. It only runs on explicit request from the admin panel, never
//! implicitly.

use serde::Serialize;
use sqlx::PgPool;
use stylen_core::defaults::{default_home_page, default_menus, default_settings, demo_catalog};
use stylen_core::page::Page;

use super::{MenuRepo, PageRepo, ProductRepo, SettingsRepo};

/// What the seeder actually planted on this run.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReport {
    pub home_page_created: bool,
    pub products_created: usize,
    pub menus_created: bool,
    pub settings_created: bool,
}

impl SeedReport {
    /// Whether anything was written at all.
    pub fn changed(&self) -> bool {
        self.home_page_created
            || self.products_created > 0
            || self.menus_created
            || self.settings_created
    }
}

/// Plants demo content into empty collections.
pub struct Seeder;

impl Seeder {
    /// Fill every empty collection with its demo content. Collections
    /// that already hold data are left untouched. Steps run sequentially
    /// and each failure aborts the rest; a partial run is safe to retry
    /// because completed steps become no-ops.
    pub async fn run(pool: &PgPool) -> Result<SeedReport, sqlx::Error> {
        let mut report = SeedReport::default();

        let home = default_home_page();
        let existing_home = PageRepo::find_any_by_slug(pool, &home.slug).await?;
        if home_needs_seeding(existing_home.as_ref()) {
            PageRepo::save(pool, &home).await?;
            report.home_page_created = true;
        }

        if ProductRepo::count(pool).await? == 0 {
            for product in demo_catalog() {
                ProductRepo::save(pool, &product)
                    .await
                    .map_err(|err| sqlx::Error::Protocol(err.to_string()))?;
                report.products_created += 1;
            }
        }

        if MenuRepo::count(pool).await? == 0 {
            MenuRepo::save(pool, &default_menus()).await?;
            report.menus_created = true;
        }

        if !SettingsRepo::exists(pool).await? {
            SettingsRepo::save(pool, &default_settings()).await?;
            report.settings_created = true;
        }

        if report.changed() {
            tracing::info!(
                home = report.home_page_created,
                products = report.products_created,
                menus = report.menus_created,
                settings = report.settings_created,
                "seeded demo content"
            );
        }

        Ok(report)
    }
}

/// Whether the home page slot is vacant. Presence is keyed by slug, not
/// by the seeded ID: an operator who deleted the seeded home page and
/// created their own at `/` (under any ID, published or draft) must not
/// get a second home page planted next to it.
fn home_needs_seeding(existing: Option<&Page>) -> bool {
    existing.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_reports_no_change() {
        assert!(!SeedReport::default().changed());
    }

    #[test]
    fn any_planted_collection_reports_change() {
        let report = SeedReport {
            products_created: 5,
            ..Default::default()
        };
        assert!(report.changed());
    }

    #[test]
    fn operator_replaced_home_page_blocks_seeding() {
        // The operator deleted the seeded home page and made their own at
        // "/": different ID, unpublished. It still occupies the slot.
        let mut replacement = default_home_page();
        replacement.id = uuid::Uuid::new_v4();
        replacement.title = "Our own landing page".into();
        replacement.is_published = false;
        assert_ne!(replacement.id, default_home_page().id);

        assert!(!home_needs_seeding(Some(&replacement)));
        assert!(home_needs_seeding(None));
    }
}
