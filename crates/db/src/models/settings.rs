//! `cms_settings` row model (singleton).

use serde_json::Value;
use sqlx::FromRow;
use stylen_core::defaults;
use stylen_core::settings::GlobalSettings;
use stylen_core::types::{EntityId, Timestamp};

/// A row from the `cms_settings` table.
#[derive(Debug, Clone, FromRow)]
pub struct SettingsRow {
    pub id: EntityId,
    pub site_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub logo_url: Option<String>,
    pub whatsapp: String,
    pub scripts: Value,
    pub integrations: Value,
    pub updated_at: Timestamp,
}

impl SettingsRow {
    /// Merge a stored row field-by-field over the built-in defaults: a
    /// blank column yields the default value for that field alone, never
    /// an absent field.
    pub fn into_settings(self) -> GlobalSettings {
        let base = defaults::default_settings();
        let field = |stored: String, default: String| {
            if stored.is_empty() {
                default
            } else {
                stored
            }
        };

        GlobalSettings {
            site_name: field(self.site_name, base.site_name),
            phone: field(self.phone, base.phone),
            email: field(self.email, base.email),
            address: field(self.address, base.address),
            logo_url: self.logo_url.filter(|u| !u.is_empty()),
            whatsapp: field(self.whatsapp, base.whatsapp),
            scripts: serde_json::from_value(self.scripts).unwrap_or_default(),
            integrations: serde_json::from_value(self.integrations).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row() -> SettingsRow {
        SettingsRow {
            id: uuid::Uuid::new_v4(),
            site_name: "StylenSurface".into(),
            phone: "+91 11111 11111".into(),
            email: String::new(),
            address: String::new(),
            logo_url: None,
            whatsapp: String::new(),
            scripts: json!({}),
            integrations: json!({}),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn blank_fields_fall_back_independently() {
        let settings = row().into_settings();
        let base = defaults::default_settings();

        // Stored value wins where present.
        assert_eq!(settings.phone, "+91 11111 11111");
        // Blank columns pick up defaults one by one.
        assert_eq!(settings.email, base.email);
        assert_eq!(settings.whatsapp, base.whatsapp);
    }

    #[test]
    fn malformed_integrations_degrade_to_disabled() {
        let mut r = row();
        r.integrations = json!("corrupt");
        let settings = r.into_settings();
        assert!(!settings.integrations.enable_auto_sync);
    }

    #[test]
    fn stored_integrations_survive() {
        let mut r = row();
        r.integrations = json!({"enableAutoSync": true, "zapierWebhook": "https://hooks.zapier.com/x"});
        let settings = r.into_settings();
        assert!(settings.integrations.enable_auto_sync);
        assert_eq!(
            settings.integrations.zapier_webhook,
            "https://hooks.zapier.com/x"
        );
    }
}
