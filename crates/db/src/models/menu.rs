//! `cms_menus` row model: one row per named navigation list.

use serde_json::Value;
use sqlx::FromRow;
use stylen_core::menu::MenuItem;

/// Row key of the header list.
pub const MENU_HEADER: &str = "header";
/// Row key of the footer list.
pub const MENU_FOOTER: &str = "footer";

/// A row from the `cms_menus` table.
#[derive(Debug, Clone, FromRow)]
pub struct MenuRow {
    pub name: String,
    pub items: Value,
}

impl MenuRow {
    /// Parse the stored items, or `None` when the payload is malformed
    /// (callers fall back to the built-in list for that name).
    pub fn into_items(self) -> Option<Vec<MenuItem>> {
        serde_json::from_value(self.items).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_stored_items() {
        let row = MenuRow {
            name: MENU_HEADER.into(),
            items: json!([{"id": "1", "label": "Home", "url": "/"}]),
        };
        let items = row.into_items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].url, "/");
    }

    #[test]
    fn malformed_items_yield_none() {
        let row = MenuRow {
            name: MENU_FOOTER.into(),
            items: json!({"not": "a list"}),
        };
        assert!(row.into_items().is_none());
    }
}
