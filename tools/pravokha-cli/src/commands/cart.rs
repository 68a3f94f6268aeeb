//! `pravokha cart` - show and mutate the shopping cart.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use pravokha_commerce::cart::{CartStore, LineItemKey};
use pravokha_commerce::catalog::{Product, ProductVariant};
use pravokha_kv::FileStore;

use crate::context::Context;

#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub action: CartAction,
}

#[derive(Subcommand)]
pub enum CartAction {
    /// Show the cart
    Show,

    /// Add a product to the cart
    Add(AddArgs),

    /// Remove a line from the cart
    Remove(LineArgs),

    /// Set a line's quantity (0 removes the line)
    Set(SetArgs),

    /// Remove everything from the cart
    Clear(ClearArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Product id, slug or SKU
    pub product: String,

    /// Variant id (defaults to the product's first variant)
    #[arg(long)]
    pub variant: Option<String>,

    /// Size label
    #[arg(long)]
    pub size: String,

    /// Units to add
    #[arg(long, default_value_t = 1)]
    pub quantity: i64,
}

#[derive(Args)]
pub struct LineArgs {
    /// Product id, slug or SKU
    pub product: String,

    /// Variant id (defaults to the product's first variant)
    #[arg(long)]
    pub variant: Option<String>,

    /// Size label
    #[arg(long)]
    pub size: String,
}

#[derive(Args)]
pub struct SetArgs {
    #[command(flatten)]
    pub line: LineArgs,

    /// New quantity
    #[arg(long)]
    pub quantity: i64,
}

#[derive(Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn run(args: &CartArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.cart()?;

    match &args.action {
        CartAction::Show => {
            render(&cart, ctx);
            Ok(())
        }
        CartAction::Add(add) => run_add(add, &mut cart, ctx),
        CartAction::Remove(line) => {
            let key = resolve_key(line, ctx)?;
            cart.remove_item(&key)?;
            render(&cart, ctx);
            Ok(())
        }
        CartAction::Set(set) => {
            let key = resolve_key(&set.line, ctx)?;
            cart.update_quantity(&key, set.quantity)?;
            render(&cart, ctx);
            Ok(())
        }
        CartAction::Clear(clear) => run_clear(clear, &mut cart, ctx),
    }
}

fn run_add(args: &AddArgs, cart: &mut CartStore<FileStore>, ctx: &Context) -> Result<()> {
    if args.quantity < 1 {
        bail!("Quantity must be at least 1");
    }

    let catalog = ctx.catalog();
    let (product, variant) = resolve_variant(&catalog, &args.product, args.variant.as_deref(), ctx)?;

    // Stock is the storefront's responsibility, checked against the
    // catalog before the cart ever sees the selection.
    let Some(stock) = variant.stock_for(&args.size) else {
        bail!(
            "Size {} not available for {} ({})",
            args.size,
            product.title,
            variant.color_name
        );
    };
    if i64::from(stock) < args.quantity {
        bail!(
            "Only {} of {} ({}, {}) in stock",
            stock,
            product.title,
            variant.color_name,
            args.size
        );
    }

    let selection = product
        .select(&variant.id, &args.size)
        .ok_or_else(|| anyhow::anyhow!("Size {} not available", args.size))?;
    let key = LineItemKey::new(
        selection.product_id.clone(),
        selection.variant_id.clone(),
        selection.size.clone(),
    );

    cart.add_item(selection)?;
    if args.quantity > 1 {
        let current = cart
            .items()
            .iter()
            .find(|i| i.key() == key)
            .map(|i| i.quantity)
            .unwrap_or(1);
        cart.update_quantity(&key, current + args.quantity - 1)?;
    }

    // The add opened the drawer; surface the cart the way the UI would
    if cart.is_open() {
        render(cart, ctx);
    }
    Ok(())
}

fn run_clear(args: &ClearArgs, cart: &mut CartStore<FileStore>, ctx: &Context) -> Result<()> {
    if cart.is_empty() {
        ctx.output.info("Your cart is already empty");
        return Ok(());
    }
    if !args.yes {
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Remove all {} items from your cart?",
                cart.item_count()
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.info("Kept the cart as it was");
            return Ok(());
        }
    }
    cart.clear()?;
    Ok(())
}

fn resolve_variant<'a>(
    catalog: &'a [Product],
    product_needle: &str,
    variant_id: Option<&str>,
    ctx: &Context,
) -> Result<(&'a Product, &'a ProductVariant)> {
    let Some(product) = ctx.find_product(catalog, product_needle) else {
        bail!("Product not found: {product_needle}");
    };
    let variant = match variant_id {
        Some(id) => product
            .variant(&pravokha_commerce::VariantId::new(id))
            .ok_or_else(|| anyhow::anyhow!("Variant not found: {id}"))?,
        None => product
            .variants
            .first()
            .ok_or_else(|| anyhow::anyhow!("{} has no variants", product.title))?,
    };
    Ok((product, variant))
}

fn resolve_key(line: &LineArgs, ctx: &Context) -> Result<LineItemKey> {
    let catalog = ctx.catalog();
    let (product, variant) = resolve_variant(&catalog, &line.product, line.variant.as_deref(), ctx)?;
    Ok(LineItemKey::new(
        product.id.clone(),
        variant.id.clone(),
        line.size.clone(),
    ))
}

/// Render the cart the way the drawer shows it.
pub fn render(cart: &CartStore<FileStore>, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": cart.items(),
            "itemCount": cart.item_count(),
            "subtotal": cart.subtotal(),
        }));
        return;
    }

    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        return;
    }

    ctx.output
        .header(&format!("Cart ({} items)", cart.item_count()));
    for item in cart.items() {
        ctx.output.list_item(&format!(
            "{} ({}, {})  x{}  {}",
            item.title, item.color_name, item.size, item.quantity, item.line_total()
        ));
    }
    if cart.combo_applied() {
        let offer = cart.offer();
        ctx.output.info(&format!(
            "Combo offer: {} pieces for {} (you save {})",
            offer.bundle_size,
            offer.bundle_price,
            offer.savings()
        ));
    }
    ctx.output.kv("Subtotal", &cart.subtotal().to_string());
}
