//! Products: the catalog entries referenced by product-detail routes and
//! cross-referenced from generic `product` template pages.

use serde::{Deserialize, Serialize};

use crate::page::Page;
use crate::types::EntityId;

/// Product category. `Other` also absorbs unrecognized stored values so a
/// hand-edited row degrades instead of failing to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Acrylic,
    Ubuntu,
    Cork,
    #[serde(other)]
    Other,
}

impl ProductCategory {
    /// The wire/category keyword, as it appears inside page slugs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Acrylic => "acrylic",
            ProductCategory::Ubuntu => "ubuntu",
            ProductCategory::Cork => "cork",
            ProductCategory::Other => "other",
        }
    }
}

/// One row of a product's technical specifications table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSpec {
    pub label: String,
    pub value: String,
}

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    /// URL-friendly key; derived from `name` at save time when blank.
    #[serde(default)]
    pub slug: String,
    pub category: ProductCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub specs: Vec<ProductSpec>,
    /// Main / featured image URL.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub applications: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
}

/// Cross-reference a generic `product` template page against the catalog.
///
/// First match in store iteration order wins: a product whose category
/// keyword is a substring of the page slug, or whose lowercased name is a
/// substring of the lowercased page title. The match is deliberately loose
/// (kept for compatibility with the site's existing city/product landing
/// pages); callers treat "no match" as a normal outcome, never an error.
pub fn match_product_for_page<'a>(page: &Page, products: &'a [Product]) -> Option<&'a Product> {
    let title = page.title.to_lowercase();
    products
        .iter()
        .find(|p| page.slug.contains(p.category.as_str()) || title.contains(&p.name.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{SeoData, Template};

    fn product(name: &str, slug: &str, category: ProductCategory) -> Product {
        Product {
            id: uuid::Uuid::new_v4(),
            name: name.into(),
            slug: slug.into(),
            category,
            description: String::new(),
            features: vec![],
            specs: vec![ProductSpec {
                label: "Grade".into(),
                value: "RC-20".into(),
            }],
            image: String::new(),
            gallery: vec![],
            applications: vec![],
            is_featured: false,
        }
    }

    fn page(slug: &str, title: &str) -> Page {
        Page {
            id: uuid::Uuid::new_v4(),
            slug: slug.into(),
            template: Template::Product,
            title: title.into(),
            seo: SeoData::default(),
            sections: vec![],
            is_published: true,
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn matches_by_category_substring_in_slug() {
        let products = vec![
            product("Clear Cast Acrylic Sheet", "clear-cast", ProductCategory::Acrylic),
            product("Industrial Rubberized Cork", "cork-sheet", ProductCategory::Cork),
        ];
        let page = page("/industrial-cork-sheet", "Industrial Cork");

        let found = match_product_for_page(&page, &products).unwrap();
        assert_eq!(found.category, ProductCategory::Cork);
    }

    #[test]
    fn matches_by_name_substring_in_title() {
        let products = vec![product(
            "Ubuntu Foam Board",
            "ubuntu-foam-board",
            ProductCategory::Ubuntu,
        )];
        let page = page("/plywood-alternative", "Best Ubuntu Foam Board Dealer");

        assert!(match_product_for_page(&page, &products).is_some());
    }

    #[test]
    fn first_match_wins_in_iteration_order() {
        let products = vec![
            product("Frosted Acrylic", "frosted", ProductCategory::Acrylic),
            product("Mirror Acrylic", "mirror", ProductCategory::Acrylic),
        ];
        let page = page("/acrylic-sheets-pune", "Acrylic Sheets in Pune");

        let found = match_product_for_page(&page, &products).unwrap();
        assert_eq!(found.name, "Frosted Acrylic");
    }

    #[test]
    fn no_match_is_none() {
        let products = vec![product("Cork Roll", "cork-roll", ProductCategory::Cork)];
        let page = page("/terms-conditions", "Terms");

        assert!(match_product_for_page(&page, &products).is_none());
    }
}
