//! Catalog error types.

use thiserror::Error;

use crate::validate::Issue;

/// Errors that can occur when reading, checking or exchanging the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Supplier not found.
    #[error("Supplier not found: {0}")]
    SupplierNotFound(String),

    /// The catalog violates one or more integrity rules.
    #[error("Catalog failed validation with {} issue(s): {}", .0.len(), join_issues(.0))]
    Invalid(Vec<Issue>),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

fn join_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}
