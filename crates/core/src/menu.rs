//! Navigation menus: two named ordered lists, header and footer.

use serde::{Deserialize, Serialize};

/// Link target for a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuTarget {
    #[serde(rename = "_self")]
    Current,
    #[serde(rename = "_blank")]
    Blank,
}

/// One navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<MenuTarget>,
}

/// The site's two navigation lists. Each list is persisted as a single
/// row keyed by its name (`header` / `footer`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuStructure {
    pub header: Vec<MenuItem>,
    pub footer: Vec<MenuItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_uses_html_attribute_values() {
        let item = MenuItem {
            id: "1".into(),
            label: "Catalog".into(),
            url: "/catalog.pdf".into(),
            target: Some(MenuTarget::Blank),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["target"], "_blank");
    }
}
