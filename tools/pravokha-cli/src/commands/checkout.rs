//! `pravokha checkout` - place an order from the cart.

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use dialoguer::{Confirm, Input};

use pravokha_commerce::checkout::{CheckoutTotals, Order, PaymentMethod, ShippingContact};

use crate::commands::cart::render;
use crate::context::Context;

#[derive(Args)]
pub struct CheckoutArgs {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// 10-digit mobile number
    #[arg(long)]
    pub phone: Option<String>,

    /// Street address
    #[arg(long)]
    pub address: Option<String>,

    /// City
    #[arg(long)]
    pub city: Option<String>,

    /// 6-digit pincode
    #[arg(long)]
    pub pincode: Option<String>,

    /// Payment method
    #[arg(long, value_enum, default_value = "upi")]
    pub payment: Payment,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Payment {
    Upi,
    Card,
    Cod,
}

impl From<Payment> for PaymentMethod {
    fn from(p: Payment) -> Self {
        match p {
            Payment::Upi => PaymentMethod::Upi,
            Payment::Card => PaymentMethod::Card,
            Payment::Cod => PaymentMethod::CashOnDelivery,
        }
    }
}

pub fn run(args: &CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.cart()?;
    if cart.is_empty() {
        bail!("Your cart is empty");
    }

    render(&cart, ctx);

    let contact = gather_contact(args, ctx)?;
    let payment: PaymentMethod = args.payment.into();

    let totals = CheckoutTotals::from_subtotal(cart.subtotal());
    ctx.output.header("Order summary");
    ctx.output.kv("Subtotal", &totals.subtotal.to_string());
    ctx.output.kv("Shipping", &totals.shipping.to_string());
    ctx.output.kv("Tax (18% GST)", &totals.tax.to_string());
    ctx.output.kv("Total", &totals.total.to_string());
    ctx.output.kv("Payment", payment.display_name());

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Place this order for {}?", totals.total))
            .default(true)
            .interact()?;
        if !confirmed {
            ctx.output.info("Order not placed");
            return Ok(());
        }
    }

    let spinner = ctx.output.spinner("Placing your order...");
    let order = Order::place(contact, payment, cart.items().to_vec(), cart.subtotal())?;
    spinner.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&order);
    } else {
        ctx.output.success("Order placed successfully!");
        ctx.output.kv("Order", &format!("#{}", order.id));
        ctx.output.kv("Placed", &format_timestamp(order.placed_at));
        ctx.output
            .kv("Confirmation", &format!("sent to {}", order.contact.email));
    }

    // The order is on its way to the fulfilment collaborator; start fresh
    cart.clear()?;
    Ok(())
}

/// Build the shipping contact from flags, prompting for what's missing.
/// Re-prompts until the form validates, keeping earlier answers editable.
fn gather_contact(args: &CheckoutArgs, ctx: &Context) -> Result<ShippingContact> {
    let mut contact = ShippingContact {
        name: args.name.clone().unwrap_or_default(),
        email: args.email.clone().unwrap_or_default(),
        phone: args.phone.clone().unwrap_or_default(),
        address: args.address.clone().unwrap_or_default(),
        city: args.city.clone().unwrap_or_default(),
        pincode: args.pincode.clone().unwrap_or_default(),
    };

    let all_flags = args.name.is_some()
        && args.email.is_some()
        && args.phone.is_some()
        && args.address.is_some()
        && args.city.is_some()
        && args.pincode.is_some();

    loop {
        if !all_flags {
            ctx.output.header("Shipping information");
            contact.name = prompt("Full name", &contact.name)?;
            contact.email = prompt("Email", &contact.email)?;
            contact.phone = prompt("Phone", &contact.phone)?;
            contact.address = prompt("Address", &contact.address)?;
            contact.city = prompt("City", &contact.city)?;
            contact.pincode = prompt("Pincode", &contact.pincode)?;
        }

        let issues = contact.issues();
        if issues.is_empty() {
            return Ok(contact);
        }
        for issue in &issues {
            ctx.output.warn(&format!("{}: {}", issue.field, issue.message));
        }
        if all_flags {
            bail!("Shipping details failed validation");
        }
    }
}

fn prompt(label: &str, initial: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(label)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn format_timestamp(unix: i64) -> String {
    chrono::DateTime::from_timestamp(unix, 0)
        .map(|t| t.format("%d %b %Y, %H:%M UTC").to_string())
        .unwrap_or_else(|| unix.to_string())
}
