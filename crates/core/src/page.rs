//! Pages: one routable URL, its declared template, and its content slots.

use serde::{Deserialize, Serialize};

use crate::section::Section;
use crate::types::{EntityId, Timestamp};

/// The fixed set of rendering templates a page can declare.
///
/// `Unknown` absorbs any unrecognized stored value; the dispatcher treats
/// it exactly like `Content` so a hand-edited row can never break
/// rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Home,
    Product,
    Content,
    Location,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Template::Home => "home",
            Template::Product => "product",
            Template::Content => "content",
            Template::Location => "location",
            Template::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Per-page SEO metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
}

/// A persisted page document.
///
/// `slug` is unique among published pages and always stored normalized
/// (see [`crate::slug::normalize_slug`]). `sections` is an ordered list
/// but the slot id is the de facto key: at most one entry per id, an
/// invariant maintained by [`crate::section::upsert_section`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: EntityId,
    pub slug: String,
    pub template: Template,
    /// Internal name shown in the admin page list.
    pub title: String,
    #[serde(default)]
    pub seo: SeoData,
    #[serde(default)]
    pub sections: Vec<Section>,
    pub is_published: bool,
    pub updated_at: Timestamp,
}

impl Page {
    /// The content object of the section with the given slot id, if any.
    pub fn section_content(&self, slot: &str) -> Option<&serde_json::Value> {
        self.sections
            .iter()
            .find(|s| s.id == slot)
            .map(|s| &s.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_round_trips_lowercase() {
        let json = serde_json::to_string(&Template::Location).unwrap();
        assert_eq!(json, "\"location\"");
        let back: Template = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Template::Location);
    }

    #[test]
    fn unrecognized_template_deserializes_to_unknown() {
        let t: Template = serde_json::from_str("\"landing-v2\"").unwrap();
        assert_eq!(t, Template::Unknown);
    }

    #[test]
    fn page_tolerates_missing_optional_fields() {
        let page: Page = serde_json::from_value(serde_json::json!({
            "id": "307c8702-85a0-4357-9653-4158654c6095",
            "slug": "/",
            "template": "home",
            "title": "Home Page",
            "isPublished": true,
            "updatedAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert!(page.sections.is_empty());
        assert_eq!(page.seo.title, "");
    }
}
