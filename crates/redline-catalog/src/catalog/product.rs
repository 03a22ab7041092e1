//! Product records.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Field names serialize in the storefront's camelCase shape
/// (`shippingDays`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Marketing copy.
    pub description: String,
    /// Price in whole currency units. The currency is set by the storefront.
    pub price: u32,
    /// Path to the product image, relative to the storefront root.
    pub image: String,
    /// Free-text category label.
    pub category: String,
    /// Supplier name; should match exactly one [`Supplier::name`](super::Supplier).
    pub supplier: String,
    /// Units in stock when the catalog was written.
    pub stock: u32,
    /// Estimated days to ship.
    pub shipping_days: u32,
}

impl Product {
    /// Check if any units are in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check if this product is supplied by `supplier`.
    pub fn is_supplied_by(&self, supplier: &str) -> bool {
        self.supplier == supplier
    }
}

/// Borrowed product row, as written in the embedded table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProductRow {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: u32,
    pub image: &'static str,
    pub category: &'static str,
    pub supplier: &'static str,
    pub stock: u32,
    pub shipping_days: u32,
}

impl From<&ProductRow> for Product {
    fn from(row: &ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name.to_string(),
            description: row.description.to_string(),
            price: row.price,
            image: row.image.to_string(),
            category: row.category.to_string(),
            supplier: row.supplier.to_string(),
            stock: row.stock,
            shipping_days: row.shipping_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product::from(&ProductRow {
            id: "3",
            name: "Vertical Mouse",
            description: "Ambidextrous vertical mouse.",
            price: 89,
            image: "/images/mouse.jpg",
            category: "Mice",
            supplier: "ComfortInput Ltd.",
            stock: 200,
            shipping_days: 4,
        })
    }

    #[test]
    fn test_product_from_row() {
        let product = sample();
        assert_eq!(product.id, "3");
        assert_eq!(product.price, 89);
        assert!(product.is_in_stock());
        assert!(product.is_supplied_by("ComfortInput Ltd."));
        assert!(!product.is_supplied_by("comfortinput ltd."));
    }

    #[test]
    fn test_out_of_stock() {
        let mut product = sample();
        product.stock = 0;
        assert!(!product.is_in_stock());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["shippingDays"], 4);
        assert_eq!(json["id"], "3");
        assert!(json.get("shipping_days").is_none());
    }
}
