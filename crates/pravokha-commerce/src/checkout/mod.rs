//! Checkout module.
//!
//! Reads the cart (never mutates it), layers shipping and tax on top of
//! the subtotal, validates the shipping contact, and produces the order
//! handed to the order-persistence collaborator.

mod contact;
mod order;

pub use contact::{ShippingContact, ValidationIssue};
pub use order::{CheckoutTotals, Order, PaymentMethod, SHIPPING_FEE, TAX_RATE_PERCENT};
