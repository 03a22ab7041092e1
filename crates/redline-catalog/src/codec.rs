//! JSON export and import.
//!
//! The JSON shape matches the storefront's records: products carry
//! `id, name, description, price, image, category, supplier, stock,
//! shippingDays` and suppliers carry `name, contact, region`. A whole
//! catalog is an object with `products` and `suppliers` arrays.

use crate::catalog::{Catalog, Product, Supplier};
use crate::error::CatalogError;

fn to_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, CatalogError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

impl Catalog {
    /// Serialize the whole catalog.
    pub fn to_json(&self, pretty: bool) -> Result<String, CatalogError> {
        to_json(self, pretty)
    }

    /// Parse a catalog previously produced by [`Catalog::to_json`].
    ///
    /// The result is not validated; call [`Catalog::validate`] for that.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        tracing::debug!(
            products = catalog.product_count(),
            suppliers = catalog.supplier_count(),
            "parsed catalog"
        );
        Ok(catalog)
    }
}

/// Serialize a product collection as a JSON array.
pub fn products_to_json(products: &[Product], pretty: bool) -> Result<String, CatalogError> {
    to_json(products, pretty)
}

/// Parse a JSON array of products.
pub fn products_from_json(json: &str) -> Result<Vec<Product>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a supplier collection as a JSON array.
pub fn suppliers_to_json(suppliers: &[Supplier], pretty: bool) -> Result<String, CatalogError> {
    to_json(suppliers, pretty)
}

/// Parse a JSON array of suppliers.
pub fn suppliers_from_json(json: &str) -> Result<Vec<Supplier>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}
