//! `pravokha products` - browse the catalog.

use anyhow::{bail, Result};
use clap::Args;

use pravokha_commerce::catalog::Product;

use crate::context::Context;

#[derive(Args)]
pub struct ProductsArgs {
    /// Product id, slug or SKU to show in detail (records a view)
    pub product: Option<String>,

    /// Only list products in this category
    #[arg(long)]
    pub category: Option<String>,
}

pub fn run(args: &ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog();

    match &args.product {
        Some(needle) => show(needle, &catalog, ctx),
        None => list(args.category.as_deref(), &catalog, ctx),
    }
}

fn list(category: Option<&str>, catalog: &[Product], ctx: &Context) -> Result<()> {
    let products: Vec<&Product> = catalog
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header("Catalog");
    for product in products {
        ctx.output
            .list_item(&format!("[{}] {}  {}", product.id, product.title, price_line(product)));
    }
    Ok(())
}

fn show(needle: &str, catalog: &[Product], ctx: &Context) -> Result<()> {
    let Some(product) = ctx.find_product(catalog, needle) else {
        bail!("Product not found: {needle}");
    };

    // Viewing a product detail records it, like visiting the product page
    ctx.recently_viewed()?.record(product)?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.title);
    ctx.output.kv("Sku", &product.sku);
    ctx.output.kv("Price", &price_line(product));
    ctx.output.kv("Category", &product.category);
    ctx.output.kv(
        "Rating",
        &format!("{} ({} reviews)", product.rating, product.reviews),
    );
    ctx.output.kv("About", &product.description);
    for variant in &product.variants {
        let sizes: Vec<String> = variant
            .sizes
            .iter()
            .map(|s| format!("{} ({})", s.size, s.stock))
            .collect();
        ctx.output.list_item(&format!(
            "{} [{}]  sizes: {}",
            variant.color_name,
            variant.id,
            sizes.join(", ")
        ));
    }
    Ok(())
}

fn price_line(product: &Product) -> String {
    match product.discount_price {
        Some(sale) => format!("{} (was {})", sale, product.price),
        None => product.price.to_string(),
    }
}
