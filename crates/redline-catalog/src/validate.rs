//! Catalog integrity checks.
//!
//! The source data relates products to suppliers by name only, and nothing
//! stops an id from repeating. These checks make those rules observable.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::CatalogError;

/// How serious an [`Issue`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Worth reporting, but the catalog is still usable.
    Warning,
    /// Breaks an integrity rule.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single integrity problem found in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// Two or more products share an id.
    DuplicateProductId { id: String },
    /// Two or more suppliers share a name.
    DuplicateSupplierName { name: String },
    /// A product is priced at zero.
    ZeroPrice { id: String },
    /// A product has a zero shipping lead time.
    ZeroShippingDays { id: String },
    /// A product names a supplier that does not exist.
    UnknownSupplier { id: String, supplier: String },
    /// A product names a supplier that several records share.
    AmbiguousSupplier {
        id: String,
        supplier: String,
        matches: usize,
    },
    /// A supplier that no product refers to.
    OrphanSupplier { name: String },
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::OrphanSupplier { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::DuplicateProductId { id } => {
                write!(f, "product id {} is used more than once", id)
            }
            Issue::DuplicateSupplierName { name } => {
                write!(f, "supplier name '{}' is used more than once", name)
            }
            Issue::ZeroPrice { id } => write!(f, "product {} has a zero price", id),
            Issue::ZeroShippingDays { id } => {
                write!(f, "product {} has a zero shipping lead time", id)
            }
            Issue::UnknownSupplier { id, supplier } => {
                write!(f, "product {} names unknown supplier '{}'", id, supplier)
            }
            Issue::AmbiguousSupplier {
                id,
                supplier,
                matches,
            } => write!(
                f,
                "product {} names supplier '{}' which matches {} records",
                id, supplier, matches
            ),
            Issue::OrphanSupplier { name } => {
                write!(f, "supplier '{}' has no products", name)
            }
        }
    }
}

impl Catalog {
    /// Collect every integrity issue, in catalog order.
    ///
    /// Product issues come first, then supplier issues. Each duplicated
    /// id or name is reported once.
    pub fn issues(&self) -> Vec<Issue> {
        let mut issues = Vec::new();

        let mut supplier_counts: HashMap<&str, usize> = HashMap::new();
        for supplier in self.suppliers() {
            *supplier_counts.entry(supplier.name.as_str()).or_default() += 1;
        }

        let mut seen_ids = HashSet::new();
        let mut reported_ids = HashSet::new();
        for product in self.products() {
            let id = product.id.as_str();
            if !seen_ids.insert(id) && reported_ids.insert(id) {
                issues.push(Issue::DuplicateProductId { id: id.to_string() });
            }
            if product.price == 0 {
                issues.push(Issue::ZeroPrice { id: id.to_string() });
            }
            if product.shipping_days == 0 {
                issues.push(Issue::ZeroShippingDays { id: id.to_string() });
            }
            match supplier_counts.get(product.supplier.as_str()).copied() {
                None => issues.push(Issue::UnknownSupplier {
                    id: id.to_string(),
                    supplier: product.supplier.clone(),
                }),
                Some(1) => {}
                Some(matches) => issues.push(Issue::AmbiguousSupplier {
                    id: id.to_string(),
                    supplier: product.supplier.clone(),
                    matches,
                }),
            }
        }

        let referenced: HashSet<&str> = self
            .products()
            .iter()
            .map(|p| p.supplier.as_str())
            .collect();
        let mut reported_names = HashSet::new();
        let mut reported_orphans = HashSet::new();
        for supplier in self.suppliers() {
            let name = supplier.name.as_str();
            if supplier_counts.get(name).copied().unwrap_or(0) > 1 && reported_names.insert(name) {
                issues.push(Issue::DuplicateSupplierName {
                    name: name.to_string(),
                });
            }
            if !referenced.contains(name) && reported_orphans.insert(name) {
                issues.push(Issue::OrphanSupplier {
                    name: name.to_string(),
                });
            }
        }

        tracing::debug!(
            products = self.product_count(),
            suppliers = self.supplier_count(),
            issues = issues.len(),
            "validated catalog"
        );
        for issue in &issues {
            tracing::warn!(severity = %issue.severity(), "{}", issue);
        }

        issues
    }

    /// Check the catalog, failing on error-severity issues.
    ///
    /// Warnings are logged but do not fail validation.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let errors: Vec<Issue> = self.issues().into_iter().filter(Issue::is_error).collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Invalid(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{catalog, products, suppliers, Region, Supplier};

    fn supplier(name: &str) -> Supplier {
        Supplier {
            name: name.to_string(),
            contact: "ops@example.com".to_string(),
            region: Region::US,
        }
    }

    #[test]
    fn test_embedded_catalog_is_clean() {
        assert!(catalog().issues().is_empty());
        assert!(catalog().validate().is_ok());
    }

    #[test]
    fn test_duplicate_product_id_reported_once() {
        let mut items = products()[..3].to_vec();
        items[1].id = items[0].id.clone();
        items[2].id = items[0].id.clone();
        let catalog = Catalog::new(items, suppliers().to_vec());

        let dupes: Vec<_> = catalog
            .issues()
            .into_iter()
            .filter(|i| matches!(i, Issue::DuplicateProductId { .. }))
            .collect();
        assert_eq!(dupes, vec![Issue::DuplicateProductId { id: "1".into() }]);
    }

    #[test]
    fn test_zero_price_and_lead_time() {
        let mut items = products()[..1].to_vec();
        items[0].price = 0;
        items[0].shipping_days = 0;
        let catalog = Catalog::new(items, suppliers()[..1].to_vec());

        assert_eq!(
            catalog.issues(),
            vec![
                Issue::ZeroPrice { id: "1".into() },
                Issue::ZeroShippingDays { id: "1".into() },
            ]
        );
    }

    #[test]
    fn test_unknown_supplier() {
        let mut items = products()[..1].to_vec();
        items[0].supplier = "ErgoTech Supply".to_string();
        let catalog = Catalog::new(items, vec![supplier("ErgoTech Supplies")]);

        let issues = catalog.issues();
        assert!(issues.contains(&Issue::UnknownSupplier {
            id: "1".into(),
            supplier: "ErgoTech Supply".into(),
        }));
        assert!(issues.contains(&Issue::OrphanSupplier {
            name: "ErgoTech Supplies".into(),
        }));
    }

    #[test]
    fn test_ambiguous_supplier_and_duplicate_name() {
        let items = products()[..1].to_vec();
        let catalog = Catalog::new(
            items,
            vec![supplier("ErgoTech Supplies"), supplier("ErgoTech Supplies")],
        );

        assert_eq!(
            catalog.issues(),
            vec![
                Issue::AmbiguousSupplier {
                    id: "1".into(),
                    supplier: "ErgoTech Supplies".into(),
                    matches: 2,
                },
                Issue::DuplicateSupplierName {
                    name: "ErgoTech Supplies".into(),
                },
            ]
        );
    }

    #[test]
    fn test_orphan_supplier_is_only_a_warning() {
        let mut all = suppliers().to_vec();
        all.push(supplier("Idle Parts GmbH"));
        let catalog = Catalog::new(products().to_vec(), all);

        let issues = catalog.issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity(), Severity::Warning);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_validate_keeps_only_errors() {
        let mut items = products()[..1].to_vec();
        items[0].price = 0;
        let catalog = Catalog::new(items, vec![supplier("ErgoTech Supplies"), supplier("Spare Co.")]);

        match catalog.validate() {
            Err(CatalogError::Invalid(errors)) => {
                assert_eq!(errors, vec![Issue::ZeroPrice { id: "1".into() }]);
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_issue_serializes_with_kind() {
        let json = serde_json::to_value(Issue::ZeroPrice { id: "9".into() }).unwrap();
        assert_eq!(json["kind"], "zero_price");
        assert_eq!(json["id"], "9");
    }
}
