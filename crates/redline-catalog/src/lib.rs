//! Static product and supplier catalog for the Redline storefront.
//!
//! The catalog is a fixed, ordered dataset built once per process:
//!
//! - **Products**: 20 ergonomic office items with price, stock and lead time
//! - **Suppliers**: 20 vendor contact records, joined to products by name
//! - **Validation**: integrity checks over the informal product/supplier join
//! - **Codec**: JSON export and import of either collection
//!
//! # Example
//!
//! ```rust
//! use redline_catalog::prelude::*;
//!
//! let catalog = catalog();
//! let desk = catalog.product("1").unwrap();
//! assert_eq!(desk.name, "Ergonomic Standing Desk Converter");
//!
//! let supplier = catalog.supplier_of(desk).unwrap();
//! assert_eq!(supplier.region, Region::US);
//!
//! assert!(catalog.validate().is_ok());
//! ```

pub mod error;
pub mod ids;

pub mod catalog;
pub mod codec;
pub mod validate;

pub use catalog::{catalog, products, suppliers, Catalog, Product, Region, Supplier};
pub use error::CatalogError;
pub use ids::ProductId;
pub use validate::{Issue, Severity};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{catalog, products, suppliers, Catalog, Product, Region, Supplier};
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;
    pub use crate::validate::{Issue, Severity};
}
