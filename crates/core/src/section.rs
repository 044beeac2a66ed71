//! Page sections: the named, typed content slots inside a page.
//!
//! A section's `id` is a semantic slot name scoped to its template
//! (`hero`, `trust`, `location-content`, ...), not a random identifier.
//! The slot registry below maps each known slot to its section type and is
//! validated at startup so an unregistered slot is a configuration error
//! rather than a silent default.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::page::Template;

/// The kind of content a section carries. Determines which editor widget
/// the admin console shows and which fields the resolver expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionType {
    Hero,
    Text,
    Features,
    Gallery,
    Form,
    ProductGrid,
    LocationContent,
    Html,
}

/// A named content slot within a page.
///
/// `content` is a freeform JSON object; the field names it carries are a
/// convention tied to the slot id (see the per-template view builders in
/// [`crate::render`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    #[serde(default)]
    pub content: Value,
}

/// Static slot registry: slot id -> section type.
///
/// Every slot any template's contract names must appear here; see
/// [`validate_slot_registry`].
const SLOT_REGISTRY: &[(&str, SectionType)] = &[
    ("hero", SectionType::Hero),
    ("trust", SectionType::Features),
    ("products", SectionType::ProductGrid),
    ("about", SectionType::Text),
    ("social-proof", SectionType::Text),
    ("applications", SectionType::Gallery),
    ("testimonials", SectionType::Features),
    ("faq", SectionType::Text),
    ("main-content", SectionType::Html),
    ("location-content", SectionType::LocationContent),
    ("product-hero", SectionType::Hero),
    ("product-features", SectionType::Features),
];

/// Look up the section type for a slot id.
pub fn section_type_for_slot(slot: &str) -> Option<SectionType> {
    SLOT_REGISTRY
        .iter()
        .find(|(id, _)| *id == slot)
        .map(|(_, ty)| *ty)
}

/// The ordered slot list each template's layout consumes.
pub fn slots_for_template(template: Template) -> &'static [&'static str] {
    match template {
        Template::Home => &[
            "hero",
            "trust",
            "products",
            "about",
            "social-proof",
            "applications",
            "testimonials",
            "faq",
        ],
        Template::Location => &["location-content"],
        Template::Product => &["product-hero", "product-features"],
        // Unknown templates dispatch with content-template behavior.
        Template::Content | Template::Unknown => &["main-content"],
    }
}

/// Verify that every slot named by any template contract has a registered
/// section type. Called once at startup; a failure here means the slot
/// registry and the template contracts have drifted apart.
pub fn validate_slot_registry() -> Result<(), CoreError> {
    for template in [
        Template::Home,
        Template::Product,
        Template::Content,
        Template::Location,
    ] {
        for slot in slots_for_template(template) {
            if section_type_for_slot(slot).is_none() {
                return Err(CoreError::Internal(format!(
                    "slot '{slot}' required by template '{template}' has no registered section type"
                )));
            }
        }
    }
    Ok(())
}

/// Upsert a section by slot id with shallow-merge semantics.
///
/// - Slot absent: a new section is appended with its type taken from the
///   slot registry (falling back to `text` for unregistered slots, which
///   mirrors how ad hoc slots behave in the editor).
/// - Slot present: the patch's fields overwrite same-named fields of the
///   existing content; untouched fields survive. Array-valued fields are
///   replaced wholesale, never merged element-wise.
///
/// Existing sections are never reordered and no duplicate id can result.
pub fn upsert_section(sections: &mut Vec<Section>, slot: &str, patch: Map<String, Value>) {
    match sections.iter_mut().find(|s| s.id == slot) {
        Some(section) => {
            let mut merged = match section.content.take() {
                Value::Object(existing) => existing,
                // Non-object content (null or hand-edited garbage) is
                // replaced outright.
                _ => Map::new(),
            };
            for (key, value) in patch {
                merged.insert(key, value);
            }
            section.content = Value::Object(merged);
        }
        None => {
            let section_type = section_type_for_slot(slot).unwrap_or(SectionType::Text);
            sections.push(Section {
                id: slot.to_string(),
                section_type,
                content: Value::Object(patch),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn patch(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("patch must be an object"),
        }
    }

    #[test]
    fn registry_covers_all_template_slots() {
        validate_slot_registry().unwrap();
    }

    #[test]
    fn upsert_creates_section_with_registered_type() {
        let mut sections = Vec::new();
        upsert_section(&mut sections, "hero", patch(json!({"title": "X"})));

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].id, "hero");
        assert_eq!(sections[0].section_type, SectionType::Hero);
        assert_eq!(sections[0].content, json!({"title": "X"}));
    }

    #[test]
    fn upsert_twice_never_duplicates_id() {
        let mut sections = Vec::new();
        upsert_section(&mut sections, "faq", patch(json!({"title": "FAQ"})));
        upsert_section(&mut sections, "faq", patch(json!({"title": "Questions"})));

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content["title"], "Questions");
    }

    #[test]
    fn shallow_merge_preserves_sibling_fields() {
        let mut sections = Vec::new();
        upsert_section(&mut sections, "hero", patch(json!({"a": 1, "b": 2})));
        upsert_section(&mut sections, "hero", patch(json!({"b": 3})));

        assert_eq!(sections[0].content, json!({"a": 1, "b": 3}));
    }

    #[test]
    fn array_fields_are_replaced_wholesale() {
        let mut sections = Vec::new();
        upsert_section(
            &mut sections,
            "faq",
            patch(json!({"items": [{"question": "q1", "answer": "a1"}]})),
        );
        upsert_section(&mut sections, "faq", patch(json!({"items": []})));

        assert_eq!(sections[0].content["items"], json!([]));
    }

    #[test]
    fn upsert_preserves_order_of_existing_sections() {
        let mut sections = Vec::new();
        upsert_section(&mut sections, "hero", patch(json!({"title": "h"})));
        upsert_section(&mut sections, "trust", patch(json!({"title": "t"})));
        upsert_section(&mut sections, "faq", patch(json!({"title": "f"})));
        upsert_section(&mut sections, "hero", patch(json!({"subtitle": "s"})));

        let ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["hero", "trust", "faq"]);
    }

    #[test]
    fn unregistered_slot_defaults_to_text() {
        let mut sections = Vec::new();
        upsert_section(&mut sections, "custom-banner", patch(json!({"x": 1})));
        assert_eq!(sections[0].section_type, SectionType::Text);
    }

    #[test]
    fn non_object_content_is_replaced() {
        let mut sections = vec![Section {
            id: "hero".into(),
            section_type: SectionType::Hero,
            content: Value::Null,
        }];
        upsert_section(&mut sections, "hero", patch(json!({"title": "X"})));
        assert_eq!(sections[0].content, json!({"title": "X"}));
    }
}
