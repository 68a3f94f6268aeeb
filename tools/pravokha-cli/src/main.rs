//! Pravokha CLI - the storefront from a terminal.
//!
//! Commands:
//! - `pravokha products` - Browse the catalog
//! - `pravokha cart` - Show and mutate the shopping cart
//! - `pravokha checkout` - Place an order from the cart
//! - `pravokha recent` - Recently viewed products
//! - `pravokha config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, CheckoutArgs, ConfigArgs, ProductsArgs, RecentArgs};

/// Pravokha - apparel storefront in your terminal
#[derive(Parser)]
#[command(name = "pravokha")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog
    Products(ProductsArgs),

    /// Show and mutate the shopping cart
    Cart(CartArgs),

    /// Place an order from the cart
    Checkout(CheckoutArgs),

    /// Recently viewed products
    Recent(RecentArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let result = run(&cli, output.clone());

    if let Err(e) = result {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: &Cli, output: output::Output) -> Result<()> {
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    match &cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Recent(args) => commands::recent::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    }
}
