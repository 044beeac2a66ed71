//! `cms_pages` row model.

use serde_json::Value;
use sqlx::FromRow;
use stylen_core::page::{Page, SeoData, Template};
use stylen_core::section::Section;
use stylen_core::types::{EntityId, Timestamp};

/// A row from the `cms_pages` table.
#[derive(Debug, Clone, FromRow)]
pub struct PageRow {
    pub id: EntityId,
    pub slug: String,
    pub template: String,
    pub title: String,
    pub seo: Value,
    pub sections: Value,
    pub is_published: bool,
    pub updated_at: Timestamp,
}

impl PageRow {
    /// Translate a stored row into a [`Page`], tolerating malformed
    /// payloads: an unparseable `seo` object falls back to empty
    /// metadata, and individual malformed sections are dropped with a
    /// warning instead of failing the whole page.
    pub fn into_page(self) -> Page {
        let template: Template =
            serde_json::from_value(Value::String(self.template)).unwrap_or(Template::Unknown);

        let seo: SeoData = serde_json::from_value(self.seo).unwrap_or_default();

        let sections: Vec<Section> = match self.sections {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match serde_json::from_value::<Section>(item) {
                    Ok(section) => Some(section),
                    Err(err) => {
                        tracing::warn!(page_id = %self.id, error = %err, "Dropping malformed section");
                        None
                    }
                })
                .collect(),
            _ => Vec::new(),
        };

        Page {
            id: self.id,
            slug: self.slug,
            template,
            title: self.title,
            seo,
            sections,
            is_published: self.is_published,
            updated_at: self.updated_at,
        }
    }

    /// Translate a [`Page`] into its stored representation.
    pub fn from_page(page: &Page) -> PageRow {
        PageRow {
            id: page.id,
            slug: page.slug.clone(),
            template: page.template.to_string(),
            title: page.title.clone(),
            seo: serde_json::to_value(&page.seo).unwrap_or(Value::Null),
            sections: serde_json::to_value(&page.sections).unwrap_or(Value::Array(vec![])),
            is_published: page.is_published,
            updated_at: page.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stylen_core::section::SectionType;

    fn row(template: &str, seo: Value, sections: Value) -> PageRow {
        PageRow {
            id: uuid::Uuid::new_v4(),
            slug: "/".into(),
            template: template.into(),
            title: "Home".into(),
            seo,
            sections,
            is_published: true,
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn round_trips_a_seeded_page() {
        let page = stylen_core::defaults::default_home_page();
        let back = PageRow::from_page(&page).into_page();

        assert_eq!(back.id, page.id);
        assert_eq!(back.template, Template::Home);
        assert_eq!(back.sections.len(), page.sections.len());
        assert_eq!(back.seo.title, page.seo.title);
    }

    #[test]
    fn unknown_template_string_maps_to_unknown() {
        let page = row("mystery", json!({}), json!([])).into_page();
        assert_eq!(page.template, Template::Unknown);
    }

    #[test]
    fn malformed_seo_falls_back_to_default() {
        let page = row("home", json!("not-an-object"), json!([])).into_page();
        assert_eq!(page.seo.title, "");
    }

    #[test]
    fn malformed_sections_are_dropped_not_fatal() {
        let sections = json!([
            {"id": "hero", "type": "hero", "content": {"title": "X"}},
            {"id": "bad", "type": "no-such-type", "content": {}},
            "not even an object"
        ]);
        let page = row("home", json!({}), sections).into_page();

        assert_eq!(page.sections.len(), 1);
        assert_eq!(page.sections[0].section_type, SectionType::Hero);
    }

    #[test]
    fn null_sections_column_yields_empty_list() {
        let page = row("home", json!({}), Value::Null).into_page();
        assert!(page.sections.is_empty());
    }
}
