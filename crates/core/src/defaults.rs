//! Built-in default content: what an empty system looks like.
//!
//! These values serve two purposes: read-path fallbacks (the public site
//! must never render with zero products or a blank homepage) and the
//! payload of the explicit seed operation. They are constructed fresh on
//! every call so callers can mutate their copies freely.

use chrono::Utc;
use serde_json::json;
use uuid::{uuid, Uuid};

use crate::menu::{MenuItem, MenuStructure};
use crate::page::{Page, SeoData, Template};
use crate::product::{Product, ProductCategory, ProductSpec};
use crate::section::{Section, SectionType};
use crate::settings::GlobalSettings;

/// Fixed id of the seeded home page, so repeated seeds target one row.
pub const HOME_PAGE_ID: Uuid = uuid!("307c8702-85a0-4357-9653-4158654c6095");

/// Default site settings (contact details, integrations all disabled).
pub fn default_settings() -> GlobalSettings {
    GlobalSettings {
        site_name: "StylenSurface".into(),
        phone: "+91 98765 43210".into(),
        email: "sales@stylensurface.com".into(),
        address: "Plot No. 123, Industrial Area, Phase 2, New Delhi, 110020".into(),
        logo_url: None,
        whatsapp: "+91 98765 43210".into(),
        scripts: Default::default(),
        integrations: Default::default(),
    }
}

/// Default header/footer navigation.
pub fn default_menus() -> MenuStructure {
    let item = |id: &str, label: &str, url: &str| MenuItem {
        id: id.into(),
        label: label.into(),
        url: url.into(),
        target: None,
    };

    MenuStructure {
        header: vec![
            item("1", "Home", "/"),
            item("2", "Acrylic Sheets", "/product/clear-cast-acrylic-sheet"),
            item("3", "Ubuntu Sheets", "/product/ubuntu-foam-board"),
            item("4", "Cork Sheets", "/product/industrial-cork-sheet"),
            item("5", "About Us", "/about"),
            item("6", "Contact", "/contact"),
        ],
        footer: vec![
            item("1", "Home", "/"),
            item("2", "About Us", "/about"),
            item("3", "Privacy Policy", "/privacy-policy"),
            item("4", "Terms", "/terms-conditions"),
        ],
    }
}

/// The built-in demo catalog returned whenever the product store is empty.
pub fn demo_catalog() -> Vec<Product> {
    let spec = |label: &str, value: &str| ProductSpec {
        label: label.into(),
        value: value.into(),
    };

    vec![
        Product {
            id: uuid!("a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11"),
            name: "Clear Cast Acrylic Sheet".into(),
            slug: "clear-cast-acrylic-sheet".into(),
            category: ProductCategory::Acrylic,
            description: "Our flagship product. Premium optical grade clear cast acrylic with \
                          92% light transmission. Superior to glass in clarity and impact \
                          resistance. Ideal for laser cutting, signage, glazing, and display \
                          fabrication."
                .into(),
            features: vec![
                "92% Optical Clarity".into(),
                "UV Resistant (Non-Yellowing)".into(),
                "Laser Cut Friendly".into(),
                "High Impact Strength".into(),
            ],
            specs: vec![
                spec("Process", "Cell Cast"),
                spec("Density", "1.19 g/cm³"),
                spec("Thickness Range", "1.5mm - 50mm"),
                spec("Standard Size", "8ft x 4ft, 6ft x 4ft"),
                spec("Tensile Strength", "75 MPa"),
            ],
            image: "https://images.unsplash.com/photo-1513366853605-54962eb02f0a?q=80&w=800&auto=format&fit=crop".into(),
            gallery: vec![
                "https://images.unsplash.com/photo-1622396636133-74323d779f45?q=80&w=800&auto=format&fit=crop".into(),
                "https://images.unsplash.com/photo-1550989460-0adf9ea622e2?q=80&w=800&auto=format&fit=crop".into(),
            ],
            applications: vec![
                "LED Signage".into(),
                "Retail Displays".into(),
                "Architectural Glazing".into(),
                "Trophies & Awards".into(),
                "Medical Incubators".into(),
            ],
            is_featured: false,
        },
        Product {
            id: uuid!("b1eebc99-9c0b-4ef8-bb6d-6bb9bd380a12"),
            name: "Gold Mirror Acrylic Sheet".into(),
            slug: "gold-mirror-acrylic".into(),
            category: ProductCategory::Acrylic,
            description: "High-gloss reflective mirror acrylic. A lightweight, shatter-resistant \
                          alternative to glass mirrors. Widely used in interior decor, wedding \
                          decoration, and premium signage."
                .into(),
            features: vec![
                "Real Glass-like Reflection".into(),
                "Shatterproof".into(),
                "Lightweight".into(),
                "Easy to Cut".into(),
            ],
            specs: vec![
                spec("Finish", "Reflective Mirror"),
                spec("Backing", "Grey / White Paint"),
                spec("Thickness", "1mm - 3mm"),
                spec("Standard Size", "8ft x 4ft"),
            ],
            image: "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?q=80&w=800&auto=format&fit=crop".into(),
            gallery: vec![],
            applications: vec![
                "Wall Decor".into(),
                "Wedding Mandaps".into(),
                "Signage Letters".into(),
                "Cosmetic Displays".into(),
            ],
            is_featured: false,
        },
        Product {
            id: uuid!("c2eebc99-9c0b-4ef8-bb6d-6bb9bd380a13"),
            name: "Ubuntu Foam Board (WPC)".into(),
            slug: "ubuntu-foam-board".into(),
            category: ProductCategory::Ubuntu,
            description: "The \"Fit and Forget\" solution. Ubuntu Sheet is a high-density \
                          Multi-Layer Composite (MLC) board engineered to replace plywood. It is \
                          100% waterproof, termite-proof, and screw-holding capable."
                .into(),
            features: vec![
                "100% Waterproof".into(),
                "Lifetime Termite Guarantee".into(),
                "High Screw Holding".into(),
                "Calibrated Surface".into(),
            ],
            specs: vec![
                spec("Core Density", "0.65 g/cm³"),
                spec("Surface Hardness", "75 Shore D"),
                spec("Thickness", "6mm, 12mm, 18mm"),
                spec("Water Absorption", "< 0.5%"),
            ],
            image: "https://picsum.photos/id/135/600/400".into(),
            gallery: vec!["https://picsum.photos/id/160/600/400".into()],
            applications: vec![
                "Modular Kitchens".into(),
                "Bathroom Vanities".into(),
                "Wardrobes".into(),
                "Wall Paneling".into(),
            ],
            is_featured: false,
        },
        Product {
            id: uuid!("d3eebc99-9c0b-4ef8-bb6d-6bb9bd380a14"),
            name: "Industrial Rubberized Cork".into(),
            slug: "industrial-cork-sheet".into(),
            category: ProductCategory::Cork,
            description: "Heavy-duty rubberized cork sheets designed for industrial sealing. \
                          Combines the compressibility of cork with the resilience of rubber."
                .into(),
            features: vec![
                "High Compression Recovery".into(),
                "Oil & Fuel Resistant".into(),
                "Vibration Dampening".into(),
                "High Temperature Tolerance".into(),
            ],
            specs: vec![
                spec("Grade", "RC-20"),
                spec("Binder", "Neoprene / Nitrile"),
                spec("Thickness", "2mm - 12mm"),
                spec("Operating Temp", "-20°C to 120°C"),
            ],
            image: "https://images.unsplash.com/photo-1621261354943-4a3b10856528?q=80&w=800&auto=format&fit=crop".into(),
            gallery: vec![],
            applications: vec![
                "Transformer Gaskets".into(),
                "Automotive Seals".into(),
                "Vibration Pads".into(),
                "Flooring Underlay".into(),
            ],
            is_featured: false,
        },
        Product {
            id: uuid!("e4eebc99-9c0b-4ef8-bb6d-6bb9bd380a15"),
            name: "Frosted / Diffuser Acrylic".into(),
            slug: "frosted-acrylic-sheet".into(),
            category: ProductCategory::Acrylic,
            description: "Specialized LED diffusing sheets that provide even light distribution \
                          without hot spots. Matte surface finish prevents glare."
                .into(),
            features: vec![
                "High Diffusion Factor".into(),
                "No LED Hotspots".into(),
                "Matte Finish".into(),
                "Easy Thermoforming".into(),
            ],
            specs: vec![
                spec("Light Transmission", "60% - 80%"),
                spec("Finish", "Matte / Sandblast"),
                spec("Thickness", "2mm, 3mm"),
            ],
            image: "https://images.unsplash.com/photo-1550684848-fac1c5b4e853?q=80&w=800&auto=format&fit=crop".into(),
            gallery: vec![],
            applications: vec![
                "Lighting Fixtures".into(),
                "Office Partitions".into(),
                "Privacy Screens".into(),
            ],
            is_featured: false,
        },
    ]
}

/// The fully populated default home page, used as root-path fallback and
/// as the seed payload.
pub fn default_home_page() -> Page {
    Page {
        id: HOME_PAGE_ID,
        slug: "/".into(),
        template: Template::Home,
        title: "Home Page".into(),
        seo: SeoData {
            title: "StylenSurface | Premium Acrylic & Industrial Sheets Manufacturer".into(),
            description: "Direct Manufacturer of Cast Acrylic, Mirror Acrylic, Ubuntu WPC, and \
                          Cork Sheets in India. Best wholesale prices for B2B buyers."
                .into(),
            keywords: "acrylic sheets, mirror acrylic, wpc board, cork sheet manufacturer india"
                .into(),
            canonical_url: None,
            og_image: None,
        },
        sections: default_home_sections(),
        is_published: true,
        updated_at: Utc::now(),
    }
}

/// The starter section set for a newly created page: `home` pages begin
/// with a copy of the default home sections so the editor is never empty;
/// every other template starts blank.
pub fn starter_sections(template: Template) -> Vec<Section> {
    match template {
        Template::Home => default_home_sections(),
        _ => Vec::new(),
    }
}

/// The default content object for a home-template slot. Field-level
/// fallback in the resolver reads individual keys out of this.
pub fn default_slot_content(slot: &str) -> serde_json::Value {
    default_home_sections()
        .into_iter()
        .find(|s| s.id == slot)
        .map(|s| s.content)
        .unwrap_or_else(|| json!({}))
}

fn default_home_sections() -> Vec<Section> {
    let section = |id: &str, ty: SectionType, content: serde_json::Value| Section {
        id: id.into(),
        section_type: ty,
        content,
    };

    vec![
        section(
            "hero",
            SectionType::Hero,
            json!({
                "title": "Premium Acrylic, Ubuntu & Cork Sheets",
                "subtitle": "Direct from manufacturer. High-quality, custom-cut sheets for furniture, construction, signage, and industrial applications across India.",
                "btnPrimary": "Get Best Price Quote",
                "btnSecondary": "View Catalog",
                "bgImage": ""
            }),
        ),
        section(
            "trust",
            SectionType::Features,
            json!({
                "title": "Why Industry Leaders Choose Us",
                "features": [
                    { "icon": "Factory", "title": "Manufacturer Direct", "desc": "No middlemen, get factory prices." },
                    { "icon": "Clock", "title": "10+ Years Experience", "desc": "Expertise in sheet manufacturing." },
                    { "icon": "Users", "title": "500+ Happy Clients", "desc": "Trusted by top furniture brands." },
                    { "icon": "Ruler", "title": "Custom Sizes", "desc": "Cut-to-size service available." },
                    { "icon": "MapPin", "title": "Pan-India Delivery", "desc": "Fast logistics partner network." },
                    { "icon": "Award", "title": "ISO 9001 Certified", "desc": "Guaranteed quality standards." }
                ]
            }),
        ),
        section(
            "products",
            SectionType::ProductGrid,
            json!({
                "title": "Our Manufacturing Range",
                "subtitle": "Explore our specialized sheet categories designed for durability, aesthetics, and industrial performance."
            }),
        ),
        section(
            "about",
            SectionType::Text,
            json!({
                "title": "Manufacturing Quality That You Can Trust",
                "text": "Established in 2013, StylenSurface has grown to become one of India's most trusted suppliers of industrial grade sheets. Our state-of-the-art manufacturing facility employs advanced extrusion and casting technologies to ensure every sheet meets rigorous ISO standards.",
                "image": "https://picsum.photos/id/180/600/500",
                "years": "10+",
                "bullets": ["ISO 9001:2015 Certified", "Advanced CNC Cutting", "Eco-friendly Practices", "24/7 Support"]
            }),
        ),
        section(
            "social-proof",
            SectionType::Text,
            json!({
                "title": "Client Conversations",
                "subtitle": "See what our clients are saying about us directly on WhatsApp and Instagram.",
                "images": [
                    "https://images.unsplash.com/photo-1611162617474-5b21e879e113?q=80&w=400&auto=format&fit=crop",
                    "https://images.unsplash.com/photo-1614680376593-902f74cf0d41?q=80&w=400&auto=format&fit=crop",
                    "https://images.unsplash.com/photo-1611162616475-46b635cb6868?q=80&w=400&auto=format&fit=crop",
                    "https://images.unsplash.com/photo-1611162618071-eead6eb8d587?q=80&w=400&auto=format&fit=crop"
                ]
            }),
        ),
        section(
            "applications",
            SectionType::Gallery,
            json!({
                "title": "Applications Across Industries",
                "subtitle": "From heavy industry to aesthetic interiors, our sheets deliver performance and beauty.",
                "items": [
                    { "title": "Furniture Manufacturing", "img": "https://picsum.photos/id/40/600/400" },
                    { "title": "Interior Design & Decor", "img": "https://picsum.photos/id/50/600/400" },
                    { "title": "Signage & Displays", "img": "https://picsum.photos/id/60/600/400" },
                    { "title": "Industrial Fabrication", "img": "https://picsum.photos/id/70/600/400" },
                    { "title": "Construction & Roofing", "img": "https://picsum.photos/id/80/600/400" },
                    { "title": "Office Partitions", "img": "https://picsum.photos/id/90/600/400" }
                ]
            }),
        ),
        section(
            "testimonials",
            SectionType::Features,
            json!({
                "title": "Trusted by Professionals",
                "subtitle": "Join over 500+ businesses who trust StylenSurface for their material needs.",
                "items": [
                    {
                        "id": 1,
                        "name": "Rajesh Kumar",
                        "role": "Production Manager",
                        "company": "Urban Furniture Ltd.",
                        "content": "We have been procuring Ubuntu sheets for our modular kitchens for 2 years. The moisture resistance and finish are top-notch.",
                        "rating": 5,
                        "image": "https://randomuser.me/api/portraits/men/32.jpg"
                    },
                    {
                        "id": 2,
                        "name": "Sarah Pinto",
                        "role": "Interior Designer",
                        "company": "Design Studio X",
                        "content": "Their clear acrylic sheets are perfect for the high-end signage projects we handle. Delivery is always on time in Mumbai.",
                        "rating": 5,
                        "image": "https://randomuser.me/api/portraits/women/44.jpg"
                    },
                    {
                        "id": 3,
                        "name": "Amit Verma",
                        "role": "Purchase Head",
                        "company": "Industrial Solutions",
                        "content": "Excellent cork sheets for our industrial gasket requirements. Very consistent density and pricing is competitive.",
                        "rating": 4,
                        "image": "https://randomuser.me/api/portraits/men/85.jpg"
                    }
                ]
            }),
        ),
        section(
            "faq",
            SectionType::Text,
            json!({
                "title": "Frequently Asked Questions",
                "items": [
                    {
                        "question": "What is the minimum order quantity (MOQ) for bulk prices?",
                        "answer": "For wholesale pricing, our MOQ is typically 500kg or 50 sheets, depending on the material type."
                    },
                    {
                        "question": "Do you provide custom cutting services?",
                        "answer": "Yes, we have advanced CNC and laser cutting machines to provide sheets cut to your exact dimensions."
                    },
                    {
                        "question": "What is the difference between Cast and Extruded Acrylic?",
                        "answer": "Cast acrylic offers better optical clarity and chemical resistance. Extruded is more uniform in thickness."
                    },
                    {
                        "question": "Do you deliver pan-India?",
                        "answer": "Yes, we have logistics partners covering all major cities and industrial hubs across India."
                    },
                    {
                        "question": "Can I get a sample before placing a bulk order?",
                        "answer": "Absolutely. We can ship a sample kit containing small swatches of our Acrylic, Ubuntu, and Cork sheets."
                    }
                ]
            }),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section;

    #[test]
    fn demo_catalog_is_non_empty_with_unique_slugs() {
        let catalog = demo_catalog();
        assert!(!catalog.is_empty());

        let mut slugs: Vec<&str> = catalog.iter().map(|p| p.slug.as_str()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), catalog.len());
    }

    #[test]
    fn demo_catalog_slugs_are_already_normalized() {
        for product in demo_catalog() {
            assert_eq!(crate::slug::derive_slug(&product.slug), product.slug);
        }
    }

    #[test]
    fn default_home_page_covers_every_home_slot() {
        let page = default_home_page();
        for slot in section::slots_for_template(Template::Home) {
            assert!(
                page.section_content(slot).is_some(),
                "home page missing slot {slot}"
            );
        }
    }

    #[test]
    fn home_sections_have_unique_ids() {
        let page = default_home_page();
        let mut ids: Vec<&str> = page.sections.iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), page.sections.len());
    }

    #[test]
    fn starter_sections_empty_for_non_home_templates() {
        assert!(!starter_sections(Template::Home).is_empty());
        assert!(starter_sections(Template::Location).is_empty());
        assert!(starter_sections(Template::Product).is_empty());
        assert!(starter_sections(Template::Content).is_empty());
    }

    #[test]
    fn home_menu_links_resolve_to_demo_catalog() {
        let catalog = demo_catalog();
        for item in default_menus().header {
            if let Some(slug) = item.url.strip_prefix("/product/") {
                assert!(
                    catalog.iter().any(|p| p.slug == slug),
                    "menu links to unknown product {slug}"
                );
            }
        }
    }
}
