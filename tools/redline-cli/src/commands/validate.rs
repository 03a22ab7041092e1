//! Catalog integrity command.

use anyhow::{bail, Result};
use redline_catalog::{Issue, Severity};
use serde::Serialize;

use super::ValidateArgs;
use crate::context::Context;
use crate::output::severity_badge;

#[derive(Debug, Serialize)]
struct Report<'a> {
    source: &'a str,
    valid: bool,
    products: usize,
    suppliers: usize,
    issues: &'a [Issue],
}

/// Whether a set of issues fails validation.
fn is_failure(issues: &[Issue], warnings_as_errors: bool) -> bool {
    issues
        .iter()
        .any(|i| warnings_as_errors || i.severity() == Severity::Error)
}

/// Run the validate command.
pub fn run(args: ValidateArgs, ctx: &Context) -> Result<()> {
    let (source, catalog) = match args.file.as_deref() {
        Some(path) => {
            ctx.output.debug(&format!("Reading catalog from {}", path));
            (path, ctx.read_catalog(path)?)
        }
        None => ("embedded", ctx.catalog().clone()),
    };

    let issues = catalog.issues();
    let warnings_as_errors = ctx.config.validation.warnings_as_errors;
    let failed = is_failure(&issues, warnings_as_errors);

    if ctx.output.is_json() {
        ctx.output.json(&Report {
            source,
            valid: !failed,
            products: catalog.product_count(),
            suppliers: catalog.supplier_count(),
            issues: &issues,
        });
    } else {
        ctx.output.header(&format!("Validating {} catalog", source));
        for issue in &issues {
            let line = format!("{}: {}", severity_badge(issue.severity()), issue);
            ctx.output.warn(&line);
        }
    }

    if failed {
        let errors = issues.iter().filter(|i| i.is_error()).count();
        bail!(
            "catalog has {} error(s) and {} warning(s)",
            errors,
            issues.len() - errors
        );
    }

    ctx.output.success(&format!(
        "{} products and {} suppliers passed validation",
        catalog.product_count(),
        catalog.supplier_count()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_failure() {
        let warning = Issue::OrphanSupplier {
            name: "Idle Co.".into(),
        };
        let error = Issue::ZeroPrice { id: "1".into() };

        assert!(!is_failure(&[], true));
        assert!(!is_failure(&[warning.clone()], false));
        assert!(is_failure(&[warning.clone()], true));
        assert!(is_failure(&[warning, error], false));
    }
}
