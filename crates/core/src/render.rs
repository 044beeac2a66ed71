//! Section-content resolution and template dispatch.
//!
//! A stored page is loosely typed: sections may be missing entirely, or
//! present with only a few fields filled in. Dispatch turns a page into a
//! fully resolved, strongly typed view model in two fallback layers:
//!
//! 1. missing section -> empty object (see [`resolved`]);
//! 2. missing field -> that field's literal default copy.
//!
//! A section that exists but omits one field therefore still shows that
//! field's default, never a blank.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::defaults;
use crate::page::{Page, SeoData, Template};
use crate::product::{match_product_for_page, Product, ProductSpec};

// ---------------------------------------------------------------------------
// Field-level fallback helpers
// ---------------------------------------------------------------------------

/// Resolve a string field: the stored value if present and non-empty,
/// otherwise the default. Pure; the whole fallback pipeline is built out
/// of this and [`resolved_list`].
pub fn resolved_text(content: &Value, defaults: &Value, key: &str) -> String {
    match content.get(key).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => defaults
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}

/// Resolve an optional string field with no default copy.
pub fn resolved_opt_text(content: &Value, key: &str) -> Option<String> {
    content
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Resolve a list field: the stored array if the key holds an array,
/// otherwise the default array. A stored empty array is a deliberate
/// edit (the admin cleared the list) and stays empty; only an absent or
/// non-array value falls through. Elements that fail to deserialize are
/// dropped rather than failing the whole list.
pub fn resolved_list<T: DeserializeOwned>(content: &Value, defaults: &Value, key: &str) -> Vec<T> {
    let pick = |source: &Value| -> Option<Vec<T>> {
        let items = source.get(key)?.as_array()?;
        Some(
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect(),
        )
    };

    pick(content)
        .or_else(|| pick(defaults))
        .unwrap_or_default()
}

/// The effective content object for a slot: the stored section's content
/// if the slot exists, an empty object otherwise.
fn resolved(page: &Page, slot: &str) -> Value {
    page.section_content(slot)
        .cloned()
        .unwrap_or_else(|| Value::Object(Default::default()))
}

// ---------------------------------------------------------------------------
// View models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroView {
    pub title: String,
    pub subtitle: String,
    pub btn_primary: String,
    pub btn_secondary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrustFeature {
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustView {
    pub title: String,
    pub features: Vec<TrustFeature>,
}

impl TrustView {
    /// Resolve against stored content, or fully default when `content` is
    /// `None` (the location template renders this panel unconditionally).
    fn resolve(content: Option<&Value>) -> TrustView {
        let defaults = defaults::default_slot_content("trust");
        let empty = Value::Object(Default::default());
        let content = content.unwrap_or(&empty);
        TrustView {
            title: resolved_text(content, &defaults, "title"),
            features: resolved_list(content, &defaults, "features"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductGridView {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutView {
    pub title: String,
    pub text: String,
    pub image: String,
    pub years: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialProofView {
    pub title: String,
    pub subtitle: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub img: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryView {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<GalleryItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialsView {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaqItem {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqView {
    pub title: String,
    pub items: Vec<FaqItem>,
}

/// The full landing page. Every slot falls back field-by-field to the
/// built-in home content; the contact block is not data-driven.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub hero: HeroView,
    pub trust: TrustView,
    pub products: ProductGridView,
    pub about: AboutView,
    pub social_proof: SocialProofView,
    pub applications: GalleryView,
    pub testimonials: TestimonialsView,
    pub faq: FaqView,
}

/// A city landing page. Every copy field substitutes the resolved city,
/// and the trust panel is always rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationView {
    pub city: String,
    pub serving_badge: String,
    pub heading: String,
    pub highlight: String,
    pub cta_label: String,
    pub why_heading: String,
    pub why_copy: String,
    pub bullets: Vec<String>,
    pub pricelist_heading: String,
    pub trust: TrustView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductHeroView {
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductFeaturesView {
    pub title: String,
    pub text: String,
    pub items: Vec<String>,
}

/// A generic product landing page with the cross-referenced specs table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTemplateView {
    pub hero: ProductHeroView,
    pub features: ProductFeaturesView,
    /// Specs of the first catalog product matched by slug/title; empty
    /// when nothing matched.
    pub specs: Vec<ProductSpec>,
    /// Shown instead of the table when no product matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specs_placeholder: Option<String>,
}

/// Freeform admin-authored HTML, rendered verbatim (trusted content).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentView {
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Italic "no content" copy shown when `html` is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// The resolved rendering payload, tagged by template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "template", rename_all = "lowercase")]
pub enum PageView {
    Home(HomeView),
    Location(LocationView),
    Product(ProductTemplateView),
    Content(ContentView),
}

/// A page resolved end to end: identity, SEO metadata, and the view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPage {
    pub id: crate::types::EntityId,
    pub slug: String,
    pub title: String,
    pub seo: SeoData,
    #[serde(flatten)]
    pub view: PageView,
}

// ---------------------------------------------------------------------------
// Literal default copy
// ---------------------------------------------------------------------------

const DEFAULT_CITY: &str = "Your Location";
const DEFAULT_LOCATION_HIGHLIGHT: &str = "Premium Sheets supplied directly to your doorstep.";
const DEFAULT_PRODUCT_SUBTITLE: &str = "Premium Quality Industrial Sheets";
const DEFAULT_FEATURES_TITLE: &str = "Product Features";
const SPECS_PLACEHOLDER: &str =
    "Contact us for detailed technical data sheets (TDS) for this product range.";
const NO_CONTENT_PLACEHOLDER: &str = "No content added yet.";

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Select a page's template and resolve every section it needs.
///
/// `products` is the catalog in store iteration order; only the `product`
/// template consults it. Pages declaring an unrecognized template are
/// rendered with content-template behavior, never an error.
pub fn dispatch(page: &Page, products: &[Product]) -> ResolvedPage {
    let view = match page.template {
        Template::Home => PageView::Home(resolve_home(page)),
        Template::Location => PageView::Location(resolve_location(page)),
        Template::Product => PageView::Product(resolve_product(page, products)),
        Template::Content | Template::Unknown => PageView::Content(resolve_content(page)),
    };

    ResolvedPage {
        id: page.id,
        slug: page.slug.clone(),
        title: page.title.clone(),
        seo: page.seo.clone(),
        view,
    }
}

/// The built-in home view, used when the root path has no stored page.
pub fn default_home_view() -> ResolvedPage {
    dispatch(&defaults::default_home_page(), &[])
}

fn resolve_home(page: &Page) -> HomeView {
    let hero = resolved(page, "hero");
    let hero_defaults = defaults::default_slot_content("hero");
    let products = resolved(page, "products");
    let products_defaults = defaults::default_slot_content("products");
    let about = resolved(page, "about");
    let about_defaults = defaults::default_slot_content("about");
    let social = resolved(page, "social-proof");
    let social_defaults = defaults::default_slot_content("social-proof");
    let apps = resolved(page, "applications");
    let apps_defaults = defaults::default_slot_content("applications");
    let testimonials = resolved(page, "testimonials");
    let testimonials_defaults = defaults::default_slot_content("testimonials");
    let faq = resolved(page, "faq");
    let faq_defaults = defaults::default_slot_content("faq");

    HomeView {
        hero: HeroView {
            title: resolved_text(&hero, &hero_defaults, "title"),
            subtitle: resolved_text(&hero, &hero_defaults, "subtitle"),
            btn_primary: resolved_text(&hero, &hero_defaults, "btnPrimary"),
            btn_secondary: resolved_text(&hero, &hero_defaults, "btnSecondary"),
            bg_image: resolved_opt_text(&hero, "bgImage"),
        },
        trust: TrustView::resolve(page.section_content("trust")),
        products: ProductGridView {
            title: resolved_text(&products, &products_defaults, "title"),
            subtitle: resolved_text(&products, &products_defaults, "subtitle"),
        },
        about: AboutView {
            title: resolved_text(&about, &about_defaults, "title"),
            text: resolved_text(&about, &about_defaults, "text"),
            image: resolved_text(&about, &about_defaults, "image"),
            years: resolved_text(&about, &about_defaults, "years"),
            bullets: resolved_list(&about, &about_defaults, "bullets"),
        },
        social_proof: SocialProofView {
            title: resolved_text(&social, &social_defaults, "title"),
            subtitle: resolved_text(&social, &social_defaults, "subtitle"),
            images: resolved_list(&social, &social_defaults, "images"),
        },
        applications: GalleryView {
            title: resolved_text(&apps, &apps_defaults, "title"),
            subtitle: resolved_text(&apps, &apps_defaults, "subtitle"),
            items: resolved_list(&apps, &apps_defaults, "items"),
        },
        testimonials: TestimonialsView {
            title: resolved_text(&testimonials, &testimonials_defaults, "title"),
            subtitle: resolved_text(&testimonials, &testimonials_defaults, "subtitle"),
            items: resolved_list(&testimonials, &testimonials_defaults, "items"),
        },
        faq: FaqView {
            title: resolved_text(&faq, &faq_defaults, "title"),
            items: resolved_list(&faq, &faq_defaults, "items"),
        },
    }
}

fn resolve_location(page: &Page) -> LocationView {
    let content = resolved(page, "location-content");
    let city = content
        .get("city")
        .and_then(Value::as_str)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CITY)
        .to_string();
    let highlight = content
        .get("highlight")
        .and_then(Value::as_str)
        .filter(|h| !h.is_empty())
        .unwrap_or(DEFAULT_LOCATION_HIGHLIGHT)
        .to_string();

    LocationView {
        serving_badge: format!("Serving {city}"),
        heading: page.title.clone(),
        highlight,
        cta_label: format!("Get {city} Quote"),
        why_heading: format!("Why buy in {city}?"),
        why_copy: format!(
            "We have established a robust supply chain network in {city}, ensuring that you get \
             factory-direct prices without the hassle of interstate logistics delays."
        ),
        bullets: vec![
            format!("Fast Delivery in {city}"),
            "Local GST Billing Available".to_string(),
            format!("Bulk Discounts for {city} Dealers"),
        ],
        pricelist_heading: format!("Request {city} Pricelist"),
        trust: TrustView::resolve(None),
        city,
    }
}

fn resolve_product(page: &Page, products: &[Product]) -> ProductTemplateView {
    let hero = resolved(page, "product-hero");
    let features = resolved(page, "product-features");

    let matched = match_product_for_page(page, products);
    let specs: Vec<ProductSpec> = matched.map(|p| p.specs.clone()).unwrap_or_default();
    let specs_placeholder = if specs.is_empty() {
        Some(SPECS_PLACEHOLDER.to_string())
    } else {
        None
    };

    ProductTemplateView {
        hero: ProductHeroView {
            title: resolved_opt_text(&hero, "title").unwrap_or_else(|| page.title.clone()),
            subtitle: resolved_opt_text(&hero, "subtitle")
                .unwrap_or_else(|| DEFAULT_PRODUCT_SUBTITLE.to_string()),
            bg_image: resolved_opt_text(&hero, "bgImage"),
        },
        features: ProductFeaturesView {
            title: resolved_opt_text(&features, "title")
                .unwrap_or_else(|| DEFAULT_FEATURES_TITLE.to_string()),
            text: resolved_opt_text(&features, "text").unwrap_or_default(),
            items: features
                .get("items")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|i| i.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default(),
        },
        specs,
        specs_placeholder,
    }
}

fn resolve_content(page: &Page) -> ContentView {
    let content = resolved(page, "main-content");
    let html = resolved_opt_text(&content, "html");
    let placeholder = if html.is_none() {
        Some(NO_CONTENT_PLACEHOLDER.to_string())
    } else {
        None
    };

    ContentView {
        heading: page.title.clone(),
        html,
        placeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::SeoData;
    use crate::section::{upsert_section, Section, SectionType};
    use assert_matches::assert_matches;
    use serde_json::json;

    fn page(template: Template, sections: Vec<Section>) -> Page {
        Page {
            id: uuid::Uuid::new_v4(),
            slug: "/test".into(),
            template,
            title: "Test Page".into(),
            seo: SeoData::default(),
            sections,
            is_published: true,
            updated_at: chrono::Utc::now(),
        }
    }

    fn section(id: &str, ty: SectionType, content: serde_json::Value) -> Section {
        Section {
            id: id.into(),
            section_type: ty,
            content,
        }
    }

    #[test]
    fn empty_home_page_renders_every_default() {
        let view = match dispatch(&page(Template::Home, vec![]), &[]).view {
            PageView::Home(v) => v,
            other => panic!("expected home view, got {other:?}"),
        };

        assert_eq!(view.hero.title, "Premium Acrylic, Ubuntu & Cork Sheets");
        assert_eq!(view.hero.btn_primary, "Get Best Price Quote");
        assert_eq!(view.trust.title, "Why Industry Leaders Choose Us");
        assert_eq!(view.trust.features.len(), 6);
        assert_eq!(view.products.title, "Our Manufacturing Range");
        assert_eq!(view.faq.items.len(), 5);
        assert_eq!(view.testimonials.items.len(), 3);
        assert!(!view.about.text.is_empty());
    }

    #[test]
    fn partial_hero_keeps_sibling_defaults() {
        let sections = vec![section(
            "hero",
            SectionType::Hero,
            json!({"title": "X"}),
        )];
        let view = match dispatch(&page(Template::Home, sections), &[]).view {
            PageView::Home(v) => v,
            other => panic!("expected home view, got {other:?}"),
        };

        assert_eq!(view.hero.title, "X");
        // Subtitle was not supplied, so the literal default survives.
        assert!(view.hero.subtitle.starts_with("Direct from manufacturer"));
    }

    #[test]
    fn location_substitutes_city_everywhere() {
        let sections = vec![section(
            "location-content",
            SectionType::LocationContent,
            json!({"city": "Pune"}),
        )];
        let view = match dispatch(&page(Template::Location, sections), &[]).view {
            PageView::Location(v) => v,
            other => panic!("expected location view, got {other:?}"),
        };

        assert_eq!(view.city, "Pune");
        let copy_with_city = [
            view.serving_badge.as_str(),
            view.cta_label.as_str(),
            view.why_heading.as_str(),
            view.why_copy.as_str(),
            view.bullets[0].as_str(),
            view.pricelist_heading.as_str(),
        ];
        let hits = copy_with_city.iter().filter(|c| c.contains("Pune")).count();
        assert!(hits >= 3, "city substituted in only {hits} copy locations");

        // The trust panel renders with defaults regardless.
        assert_eq!(view.trust.features.len(), 6);
    }

    #[test]
    fn location_without_city_uses_placeholder() {
        let view = match dispatch(&page(Template::Location, vec![]), &[]).view {
            PageView::Location(v) => v,
            other => panic!("expected location view, got {other:?}"),
        };
        assert_eq!(view.city, "Your Location");
        assert_eq!(view.highlight, DEFAULT_LOCATION_HIGHLIGHT);
    }

    #[test]
    fn product_template_cross_references_catalog() {
        let catalog = crate::defaults::demo_catalog();
        let mut p = page(Template::Product, vec![]);
        p.slug = "/industrial-cork-sheet".into();
        p.title = "Industrial Cork".into();

        let view = match dispatch(&p, &catalog).view {
            PageView::Product(v) => v,
            other => panic!("expected product view, got {other:?}"),
        };

        assert!(view.specs_placeholder.is_none());
        assert!(view.specs.iter().any(|s| s.label == "Grade"));
        // Hero falls back to the page title.
        assert_eq!(view.hero.title, "Industrial Cork");
        assert_eq!(view.hero.subtitle, DEFAULT_PRODUCT_SUBTITLE);
    }

    #[test]
    fn product_template_without_match_shows_placeholder() {
        let mut p = page(Template::Product, vec![]);
        p.slug = "/something-unrelated".into();
        p.title = "Unrelated".into();

        let view = match dispatch(&p, &crate::defaults::demo_catalog()).view {
            PageView::Product(v) => v,
            other => panic!("expected product view, got {other:?}"),
        };

        assert!(view.specs.is_empty());
        assert_eq!(view.specs_placeholder.as_deref(), Some(SPECS_PLACEHOLDER));
    }

    #[test]
    fn content_template_renders_html_or_placeholder() {
        let with_html = page(
            Template::Content,
            vec![section(
                "main-content",
                SectionType::Html,
                json!({"html": "<p>Terms</p>"}),
            )],
        );
        let view = match dispatch(&with_html, &[]).view {
            PageView::Content(v) => v,
            other => panic!("expected content view, got {other:?}"),
        };
        assert_eq!(view.html.as_deref(), Some("<p>Terms</p>"));
        assert!(view.placeholder.is_none());

        let empty = page(Template::Content, vec![]);
        let view = match dispatch(&empty, &[]).view {
            PageView::Content(v) => v,
            other => panic!("expected content view, got {other:?}"),
        };
        assert!(view.html.is_none());
        assert_eq!(view.placeholder.as_deref(), Some(NO_CONTENT_PLACEHOLDER));
    }

    #[test]
    fn unknown_template_falls_back_to_content_behavior() {
        let p: Page = serde_json::from_value(json!({
            "id": "a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11",
            "slug": "/legacy",
            "template": "fancy-new-layout",
            "title": "Legacy",
            "isPublished": true,
            "updatedAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_matches!(dispatch(&p, &[]).view, PageView::Content(_));
    }

    #[test]
    fn cleared_list_is_not_refilled_with_defaults() {
        // Admin edits replace list fields wholesale, so writing an empty
        // array means "remove every entry" and must stick.
        let mut p = page(Template::Home, vec![]);
        upsert_section(
            &mut p.sections,
            "faq",
            json!({"items": []}).as_object().unwrap().clone(),
        );

        let view = match dispatch(&p, &[]).view {
            PageView::Home(v) => v,
            other => panic!("expected home view, got {other:?}"),
        };

        assert!(view.faq.items.is_empty(), "cleared FAQ list was refilled");
        // The title was never touched, so its default copy survives.
        assert_eq!(view.faq.title, "Frequently Asked Questions");
    }

    #[test]
    fn upserted_section_feeds_straight_into_dispatch() {
        let mut p = page(Template::Home, vec![]);
        upsert_section(
            &mut p.sections,
            "hero",
            json!({"title": "Edited"}).as_object().unwrap().clone(),
        );

        let view = match dispatch(&p, &[]).view {
            PageView::Home(v) => v,
            other => panic!("expected home view, got {other:?}"),
        };
        assert_eq!(view.hero.title, "Edited");
    }

    #[test]
    fn default_home_view_matches_seeded_home_page() {
        let seeded = dispatch(&crate::defaults::default_home_page(), &[]);
        let builtin = default_home_view();
        assert_eq!(
            serde_json::to_value(&seeded.view).unwrap(),
            serde_json::to_value(&builtin.view).unwrap()
        );
    }
}
