//! `cms_products` row model.

use serde_json::Value;
use sqlx::FromRow;
use stylen_core::product::{Product, ProductCategory, ProductSpec};
use stylen_core::slug::derive_slug;
use stylen_core::types::EntityId;

/// A row from the `cms_products` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
    pub id: EntityId,
    pub name: String,
    pub slug: String,
    pub category: String,
    pub description: String,
    pub features: Value,
    pub specs: Value,
    pub image: String,
    pub gallery: Value,
    pub applications: Value,
    pub is_featured: bool,
}

fn string_list(value: Value) -> Vec<String> {
    serde_json::from_value(value).unwrap_or_default()
}

impl ProductRow {
    /// Translate a stored row into a [`Product`]. A blank stored slug is
    /// re-derived from the name; an unrecognized category degrades to
    /// `other`.
    pub fn into_product(self) -> Product {
        let category: ProductCategory =
            serde_json::from_value(Value::String(self.category)).unwrap_or(ProductCategory::Other);

        let slug = if self.slug.is_empty() {
            derive_slug(&self.name)
        } else {
            self.slug
        };

        let specs: Vec<ProductSpec> = serde_json::from_value(self.specs).unwrap_or_default();

        Product {
            id: self.id,
            name: self.name,
            slug,
            category,
            description: self.description,
            features: string_list(self.features),
            specs,
            image: self.image,
            gallery: string_list(self.gallery),
            applications: string_list(self.applications),
            is_featured: self.is_featured,
        }
    }

    /// Translate a [`Product`] into its stored representation, deriving
    /// the slug from the name when blank.
    pub fn from_product(product: &Product) -> ProductRow {
        let slug = if product.slug.is_empty() {
            derive_slug(&product.name)
        } else {
            product.slug.clone()
        };

        ProductRow {
            id: product.id,
            name: product.name.clone(),
            slug,
            category: product.category.as_str().to_string(),
            description: product.description.clone(),
            features: serde_json::to_value(&product.features).unwrap_or(Value::Array(vec![])),
            specs: serde_json::to_value(&product.specs).unwrap_or(Value::Array(vec![])),
            image: product.image.clone(),
            gallery: serde_json::to_value(&product.gallery).unwrap_or(Value::Array(vec![])),
            applications: serde_json::to_value(&product.applications)
                .unwrap_or(Value::Array(vec![])),
            is_featured: product.is_featured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(name: &str, slug: &str, category: &str) -> ProductRow {
        ProductRow {
            id: uuid::Uuid::new_v4(),
            name: name.into(),
            slug: slug.into(),
            category: category.into(),
            description: String::new(),
            features: json!([]),
            specs: json!([]),
            image: String::new(),
            gallery: json!([]),
            applications: json!([]),
            is_featured: false,
        }
    }

    #[test]
    fn blank_slug_is_derived_from_name() {
        let product = row("Matte Black Acrylic Sheet!!", "", "acrylic").into_product();
        assert_eq!(product.slug, "matte-black-acrylic-sheet");
    }

    #[test]
    fn stored_slug_is_kept_verbatim() {
        let product = row("Gold Mirror Acrylic Sheet", "gold-mirror-acrylic", "acrylic")
            .into_product();
        assert_eq!(product.slug, "gold-mirror-acrylic");
    }

    #[test]
    fn unknown_category_degrades_to_other() {
        let product = row("Mystery Sheet", "mystery", "granite").into_product();
        assert_eq!(product.category, ProductCategory::Other);
    }

    #[test]
    fn round_trips_demo_catalog_entries() {
        for product in stylen_core::defaults::demo_catalog() {
            let back = ProductRow::from_product(&product).into_product();
            assert_eq!(back.slug, product.slug);
            assert_eq!(back.category, product.category);
            assert_eq!(back.specs, product.specs);
            assert_eq!(back.features, product.features);
        }
    }

    #[test]
    fn malformed_spec_payload_yields_empty_specs() {
        let mut r = row("Cork", "cork", "cork");
        r.specs = json!({"oops": true});
        assert!(r.into_product().specs.is_empty());
    }
}
