//! Product record supplied by the catalog.

use crate::catalog::tags::{self, ProductTag};
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductCategory {
    /// Whole and ground spices.
    #[default]
    Spices,
    /// Chocolates and confectionery.
    Chocolates,
    /// House specials.
    Specials,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Spices => "spices",
            ProductCategory::Chocolates => "chocolates",
            ProductCategory::Specials => "specials",
        }
    }

    /// Human-readable name for listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::Spices => "Spices",
            ProductCategory::Chocolates => "Chocolates",
            ProductCategory::Specials => "House Specials",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "spices" => Some(ProductCategory::Spices),
            "chocolates" => Some(ProductCategory::Chocolates),
            "specials" | "house specials" => Some(ProductCategory::Specials),
            _ => None,
        }
    }
}

/// A product as the catalog supplies it to the cart and checkout.
///
/// The cart snapshots `name` and `price` into its line items; the rest is
/// display material for product pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Image reference (path or URL).
    pub image: String,
    /// Full description.
    pub description: Option<String>,
    /// Pack weight as displayed (e.g., "100g").
    pub weight: Option<String>,
    /// Category for listings.
    pub category: ProductCategory,
    /// Merchandising tags, parsed from the legacy feed shape.
    #[serde(
        default,
        deserialize_with = "tags::deserialize_legacy",
        serialize_with = "tags::serialize_labels"
    )]
    pub tags: BTreeSet<ProductTag>,
    /// Region of origin.
    pub origin: Option<String>,
    /// Ingredient list.
    pub ingredients: Option<String>,
    /// Suggested use.
    #[serde(rename = "usage")]
    pub usage_note: Option<String>,
}

impl Product {
    /// Create a new product with the minimum fields.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: String::new(),
            description: None,
            weight: None,
            category: ProductCategory::default(),
            tags: BTreeSet::new(),
            origin: None,
            ingredients: None,
            usage_note: None,
        }
    }

    /// Add a tag to this product.
    pub fn add_tag(&mut self, tag: ProductTag) {
        self.tags.insert(tag);
    }

    /// Check if the product carries any sale badge.
    pub fn is_on_sale(&self) -> bool {
        self.tags
            .iter()
            .any(|t| matches!(t, ProductTag::Sale | ProductTag::PercentOff(_)))
    }

    /// Discount percentage from a percent-off badge, if present.
    pub fn discount_percentage(&self) -> Option<u8> {
        self.tags.iter().find_map(|t| match t {
            ProductTag::PercentOff(p) => Some(*p),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn masala() -> Product {
        let mut p = Product::new(
            "4",
            "Garam Masala",
            Money::from_decimal(90.0, Currency::INR),
        );
        p.image = "/images/garam-masala.jpg".to_string();
        p.weight = Some("100g".to_string());
        p
    }

    #[test]
    fn test_product_creation() {
        let product = masala();
        assert_eq!(product.id.as_str(), "4");
        assert_eq!(product.price.amount_cents, 9000);
        assert_eq!(product.category, ProductCategory::Spices);
    }

    #[test]
    fn test_sale_badges() {
        let mut product = masala();
        assert!(!product.is_on_sale());

        product.add_tag(ProductTag::PercentOff(15));
        assert!(product.is_on_sale());
        assert_eq!(product.discount_percentage(), Some(15));
    }

    #[test]
    fn test_deserialize_legacy_string_tag() {
        let json = r#"{
            "id": "7",
            "name": "Dark Chocolate",
            "price": { "amount_cents": 24900, "currency": "INR" },
            "image": "/images/dark.jpg",
            "category": "Chocolates",
            "tags": "New Arrival"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.tags.len(), 1);
        assert!(product.tags.contains(&ProductTag::NewArrival));
    }

    #[test]
    fn test_deserialize_legacy_list_tags() {
        let json = r#"{
            "id": "4",
            "name": "Garam Masala",
            "price": { "amount_cents": 9000, "currency": "INR" },
            "image": "/images/garam-masala.jpg",
            "category": "Spices",
            "tags": ["SALE", "Best Seller", "Limited"]
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.tags.len(), 2); // unknown "Limited" dropped
        assert!(product.tags.contains(&ProductTag::Sale));
        assert!(product.tags.contains(&ProductTag::BestSeller));
    }

    #[test]
    fn test_deserialize_missing_tags() {
        let json = r#"{
            "id": "9",
            "name": "Saffron",
            "price": { "amount_cents": 49900, "currency": "INR" },
            "image": "/images/saffron.jpg",
            "category": "Spices"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.tags.is_empty());
    }

    #[test]
    fn test_serialize_tags_as_labels() {
        let mut product = masala();
        product.add_tag(ProductTag::Sale);
        product.add_tag(ProductTag::BestSeller);
        let json = serde_json::to_value(&product).unwrap();
        let labels: Vec<String> =
            serde_json::from_value(json["tags"].clone()).unwrap();
        assert!(labels.contains(&"SALE".to_string()));
        assert!(labels.contains(&"Best Seller".to_string()));
    }
}
