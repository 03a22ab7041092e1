//! Product listing commands.

use anyhow::Result;
use redline_catalog::{Product, Supplier};
use serde::Serialize;

use super::{ProductArgs, ProductsArgs};
use crate::context::Context;
use crate::output::format_lead_time;

const WIDTHS: [usize; 5] = [4, 36, 8, 6, 8];

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let products = limited(ctx.catalog().products(), args.limit);

    if ctx.output.is_json() {
        ctx.output.json(products);
        return Ok(());
    }

    ctx.output.header("Products");
    ctx.output
        .table_row(&["ID", "NAME", "PRICE", "STOCK", "SHIPS IN"], &WIDTHS);
    for product in products {
        let price = ctx.config.output.format_price(product.price);
        let stock = stock_label(product);
        let lead = format_lead_time(product.shipping_days);
        ctx.output.table_row(
            &[
                product.id.as_str(),
                product.name.as_str(),
                price.as_str(),
                stock.as_str(),
                lead.as_str(),
            ],
            &WIDTHS,
        );
    }
    ctx.output.info(&format!(
        "{} of {} products",
        products.len(),
        ctx.catalog().product_count()
    ));

    Ok(())
}

#[derive(Serialize)]
struct ProductDetail<'a> {
    product: &'a Product,
    supplier: Option<&'a Supplier>,
}

/// Run the product command.
pub fn show(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog();
    let product = catalog.require_product(&args.id)?;
    let supplier = catalog.supplier_of(product);

    if ctx.output.is_json() {
        ctx.output.json(&ProductDetail { product, supplier });
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("ID", product.id.as_str());
    ctx.output.kv("Category", &product.category);
    ctx.output
        .kv("Price", &ctx.config.output.format_price(product.price));
    ctx.output.kv("Stock", &stock_label(product));
    ctx.output
        .kv("Ships in", &format_lead_time(product.shipping_days));
    ctx.output.kv("Image", &product.image);
    ctx.output.kv("Description", &product.description);

    match supplier {
        Some(supplier) => {
            ctx.output.kv(
                "Supplier",
                &format!("{} <{}> ({})", supplier.name, supplier.contact, supplier.region),
            );
        }
        None => ctx
            .output
            .warn(&format!("Supplier '{}' is not in the catalog", product.supplier)),
    }

    Ok(())
}

/// Stock count, or "sold out" when nothing is left.
fn stock_label(product: &Product) -> String {
    if product.is_in_stock() {
        product.stock.to_string()
    } else {
        "sold out".to_string()
    }
}

fn limited<T>(items: &[T], limit: Option<usize>) -> &[T] {
    match limit {
        Some(n) => &items[..n.min(items.len())],
        None => items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limited() {
        let items = [1, 2, 3];
        assert_eq!(limited(&items, None), &[1, 2, 3]);
        assert_eq!(limited(&items, Some(2)), &[1, 2]);
        assert_eq!(limited(&items, Some(10)), &[1, 2, 3]);
        assert!(limited(&items, Some(0)).is_empty());
    }

    #[test]
    fn test_stock_label() {
        let mut product = redline_catalog::catalog().require_product("1").unwrap().clone();
        assert_eq!(stock_label(&product), "50");
        product.stock = 0;
        assert_eq!(stock_label(&product), "sold out");
    }

    #[test]
    fn test_product_detail_json() {
        let catalog = redline_catalog::catalog();
        let product = catalog.require_product("13").unwrap();
        let detail = ProductDetail {
            product,
            supplier: catalog.supplier_of(product),
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["product"]["name"], "Monitor Light Bar");
        assert_eq!(json["supplier"]["name"], "BrightView Lighting");
        assert_eq!(json["supplier"]["region"], "EU");
    }
}
