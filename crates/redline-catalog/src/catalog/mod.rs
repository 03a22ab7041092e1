//! Product catalog module.
//!
//! Contains the product and supplier record types, the embedded dataset,
//! and lookups across the name-based product/supplier association.

mod data;
mod product;
mod supplier;

pub use product::Product;
pub use supplier::{Region, Supplier};

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    let catalog = Catalog::new(
        data::PRODUCT_ROWS.iter().map(Product::from).collect(),
        data::SUPPLIER_ROWS.iter().map(Supplier::from).collect(),
    );
    tracing::debug!(
        products = catalog.product_count(),
        suppliers = catalog.supplier_count(),
        "materialized embedded catalog"
    );
    catalog
});

/// The embedded catalog, built on first access.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// The embedded products, in display order.
pub fn products() -> &'static [Product] {
    CATALOG.products()
}

/// The embedded suppliers, in display order.
pub fn suppliers() -> &'static [Supplier] {
    CATALOG.suppliers()
}

/// An ordered set of products and suppliers.
///
/// The embedded dataset is one `Catalog`; others come from
/// [`Catalog::from_json`] or [`Catalog::new`]. Nothing here mutates the
/// collections once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
    suppliers: Vec<Supplier>,
}

impl Catalog {
    /// Create a catalog from ordered collections.
    pub fn new(products: Vec<Product>, suppliers: Vec<Supplier>) -> Self {
        Self {
            products,
            suppliers,
        }
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All suppliers, in catalog order.
    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn supplier_count(&self) -> usize {
        self.suppliers.len()
    }

    /// Find a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Find a product by id, or fail with [`CatalogError::ProductNotFound`].
    pub fn require_product(&self, id: &str) -> Result<&Product, CatalogError> {
        self.product(id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }

    /// Find a supplier by exact name.
    pub fn supplier(&self, name: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.name == name)
    }

    /// Find a supplier by name, or fail with [`CatalogError::SupplierNotFound`].
    pub fn require_supplier(&self, name: &str) -> Result<&Supplier, CatalogError> {
        self.supplier(name)
            .ok_or_else(|| CatalogError::SupplierNotFound(name.to_string()))
    }

    /// Resolve the supplier a product names.
    ///
    /// Returns `None` when no supplier carries that name. If several do,
    /// the first in catalog order wins; [`Catalog::issues`] reports that case.
    pub fn supplier_of(&self, product: &Product) -> Option<&Supplier> {
        self.supplier(&product.supplier)
    }

    /// Products naming `supplier`, in catalog order.
    pub fn products_from<'a>(&'a self, supplier: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| p.is_supplied_by(supplier))
    }

    /// Distinct category labels, in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }
}
