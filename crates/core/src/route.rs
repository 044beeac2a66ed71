//! Path classification for the page resolver.
//!
//! A handful of paths are statically reserved and never reach the CMS
//! lookup: the about page, the contact page, and product-detail routes
//! keyed by product slug. Everything else, including the root, resolves
//! through the page store.

use serde::{Deserialize, Serialize};

use crate::slug::normalize_slug;

/// A statically routed page that bypasses the CMS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "kebab-case")]
pub enum StaticRoute {
    About,
    Contact,
    ProductDetail { slug: String },
}

/// Where an incoming path should be routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// Reserved path; the caller renders its fixed page.
    Reserved(StaticRoute),
    /// Dynamic path; look up the normalized slug in the page store.
    Page(String),
}

/// Classify a raw request path. The path is normalized first, so
/// `/about/` and `about` both hit the reserved about route.
pub fn classify_path(path: &str) -> RouteTarget {
    let slug = normalize_slug(path);

    match slug.as_str() {
        "/about" => RouteTarget::Reserved(StaticRoute::About),
        "/contact" => RouteTarget::Reserved(StaticRoute::Contact),
        _ => {
            if let Some(product_slug) = slug.strip_prefix("/product/") {
                if !product_slug.is_empty() {
                    return RouteTarget::Reserved(StaticRoute::ProductDetail {
                        slug: product_slug.to_string(),
                    });
                }
            }
            RouteTarget::Page(slug)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_a_page_lookup() {
        assert_eq!(classify_path("/"), RouteTarget::Page("/".into()));
    }

    #[test]
    fn about_and_contact_are_reserved() {
        assert_eq!(
            classify_path("/about/"),
            RouteTarget::Reserved(StaticRoute::About)
        );
        assert_eq!(
            classify_path("contact"),
            RouteTarget::Reserved(StaticRoute::Contact)
        );
    }

    #[test]
    fn product_detail_extracts_slug() {
        assert_eq!(
            classify_path("/product/ubuntu-foam-board"),
            RouteTarget::Reserved(StaticRoute::ProductDetail {
                slug: "ubuntu-foam-board".into()
            })
        );
    }

    #[test]
    fn bare_product_prefix_is_dynamic() {
        assert_eq!(
            classify_path("/product/"),
            RouteTarget::Page("/product".into())
        );
    }

    #[test]
    fn arbitrary_slugs_are_dynamic() {
        assert_eq!(
            classify_path("/acrylic-sheets-pune/"),
            RouteTarget::Page("/acrylic-sheets-pune".into())
        );
    }
}
