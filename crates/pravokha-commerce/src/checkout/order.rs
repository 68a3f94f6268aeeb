//! Order totals and placement.

use serde::{Deserialize, Serialize};

use crate::cart::LineItem;
use crate::checkout::ShippingContact;
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;

/// Flat shipping fee, in whole currency units.
pub const SHIPPING_FEE: i64 = 99;

/// GST applied on the subtotal.
pub const TAX_RATE_PERCENT: i64 = 18;

/// The price breakdown shown on the checkout page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CheckoutTotals {
    /// Cart subtotal, after any combo override.
    pub subtotal: Money,
    /// Flat shipping fee.
    pub shipping: Money,
    /// Tax, rounded half-up.
    pub tax: Money,
    /// What the shopper pays.
    pub total: Money,
}

impl CheckoutTotals {
    /// Compute the breakdown from a cart subtotal.
    pub fn from_subtotal(subtotal: Money) -> Self {
        let shipping = Money::new(SHIPPING_FEE, subtotal.currency);
        let tax = subtotal.percent(TAX_RATE_PERCENT);
        let total = subtotal.add(&shipping).add(&tax);
        Self {
            subtotal,
            shipping,
            tax,
            total,
        }
    }
}

/// How the shopper pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Upi,
    Card,
    CashOnDelivery,
}

impl PaymentMethod {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Card => "Credit / Debit Card",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }
}

/// A placed order: the cart's final line-item sequence plus contact,
/// payment method and the computed totals.
///
/// Durable storage of orders belongs to a separate collaborator; this
/// type is what gets handed to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Order number shown on the confirmation.
    pub id: OrderId,
    /// Shipping contact, validated at placement.
    pub contact: ShippingContact,
    /// Selected payment method.
    pub payment: PaymentMethod,
    /// Line items as they were at placement.
    pub items: Vec<LineItem>,
    /// Price breakdown.
    pub totals: CheckoutTotals,
    /// Unix timestamp of placement.
    pub placed_at: i64,
}

impl Order {
    /// Place an order from the cart's current state.
    ///
    /// Fails on an empty cart or an invalid contact; the cart itself is
    /// left untouched either way (clearing it after a successful
    /// placement is the caller's move).
    pub fn place(
        contact: ShippingContact,
        payment: PaymentMethod,
        items: Vec<LineItem>,
        subtotal: Money,
    ) -> Result<Self, CommerceError> {
        if items.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        contact.validate()?;
        Ok(Self {
            id: OrderId::generate(),
            contact,
            payment,
            items,
            totals: CheckoutTotals::from_subtotal(subtotal),
            placed_at: current_timestamp(),
        })
    }

    /// Total unit count across the order.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{ProductId, VariantId};

    fn contact() -> ShippingContact {
        ShippingContact {
            name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            address: "42 Lakeview Road, Indiranagar".to_string(),
            city: "Bengaluru".to_string(),
            pincode: "560038".to_string(),
        }
    }

    fn line(price: i64, quantity: i64) -> LineItem {
        LineItem {
            product_id: ProductId::new("1"),
            variant_id: VariantId::new("1-teal"),
            title: "Classic Cotton Tee".to_string(),
            color_name: "Teal".to_string(),
            color_hex: "#0F6B66".to_string(),
            size: "M".to_string(),
            unit_price: Money::rupees(price),
            quantity,
            image: String::new(),
        }
    }

    #[test]
    fn test_totals_breakdown() {
        // Subtotal 949: shipping 99 flat, 18% tax rounds 170.82 up to 171
        let totals = CheckoutTotals::from_subtotal(Money::rupees(949));
        assert_eq!(totals.shipping, Money::rupees(99));
        assert_eq!(totals.tax, Money::rupees(171));
        assert_eq!(totals.total, Money::rupees(949 + 99 + 171));
    }

    #[test]
    fn test_zero_subtotal_still_charges_shipping() {
        let totals = CheckoutTotals::from_subtotal(Money::rupees(0));
        assert_eq!(totals.tax, Money::rupees(0));
        assert_eq!(totals.total, Money::rupees(99));
    }

    #[test]
    fn test_place_order() {
        let order = Order::place(
            contact(),
            PaymentMethod::Upi,
            vec![line(799, 2)],
            Money::rupees(1598),
        )
        .unwrap();
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.totals.subtotal, Money::rupees(1598));
        assert_eq!(order.id.as_str().len(), 8);
        assert!(order.placed_at > 0);
    }

    #[test]
    fn test_place_with_empty_cart_fails() {
        let result = Order::place(contact(), PaymentMethod::Upi, vec![], Money::rupees(0));
        assert!(matches!(result, Err(CommerceError::EmptyCart)));
    }

    #[test]
    fn test_place_with_invalid_contact_fails() {
        let mut bad = contact();
        bad.phone = "12345".to_string();
        let result = Order::place(bad, PaymentMethod::Card, vec![line(325, 3)], Money::rupees(949));
        assert!(matches!(result, Err(CommerceError::Validation(_))));
    }

    #[test]
    fn test_order_serializes_round_trip() {
        let order = Order::place(
            contact(),
            PaymentMethod::CashOnDelivery,
            vec![line(325, 3)],
            Money::rupees(949),
        )
        .unwrap();
        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(back, order);
    }
}
