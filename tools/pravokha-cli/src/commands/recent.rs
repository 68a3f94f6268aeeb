//! `pravokha recent` - recently viewed products.

use anyhow::Result;
use clap::Args;

use crate::context::Context;

#[derive(Args)]
pub struct RecentArgs {}

pub fn run(_args: &RecentArgs, ctx: &Context) -> Result<()> {
    let recent = ctx.recently_viewed()?;

    if ctx.output.is_json() {
        ctx.output.json(&recent.entries());
        return Ok(());
    }

    if recent.is_empty() {
        ctx.output
            .info("Nothing viewed yet. Try `pravokha products <id>`");
        return Ok(());
    }

    ctx.output.header("Recently viewed");
    for entry in recent.entries() {
        ctx.output.list_item(&format!(
            "[{}] {}  {}",
            entry.product_id, entry.title, entry.price
        ));
    }
    Ok(())
}
