//! Supplier listing command.

use anyhow::Result;
use redline_catalog::{Catalog, Region};
use serde::Serialize;

use crate::context::Context;

const WIDTHS: [usize; 4] = [24, 6, 28, 8];

#[derive(Debug, Serialize)]
struct SupplierInfo<'a> {
    name: &'a str,
    contact: &'a str,
    region: Region,
    products: usize,
}

fn supplier_infos(catalog: &Catalog) -> Vec<SupplierInfo<'_>> {
    catalog
        .suppliers()
        .iter()
        .map(|s| SupplierInfo {
            name: &s.name,
            contact: &s.contact,
            region: s.region,
            products: catalog.products_from(&s.name).count(),
        })
        .collect()
}

/// Run the suppliers command.
pub fn run(ctx: &Context) -> Result<()> {
    let infos = supplier_infos(ctx.catalog());

    if ctx.output.is_json() {
        ctx.output.json(&infos);
        return Ok(());
    }

    ctx.output.header("Suppliers");
    ctx.output
        .table_row(&["NAME", "REGION", "CONTACT", "PRODUCTS"], &WIDTHS);
    for info in &infos {
        let products = info.products.to_string();
        ctx.output.table_row(
            &[info.name, info.region.as_str(), info.contact, products.as_str()],
            &WIDTHS,
        );
    }

    Ok(())
}
