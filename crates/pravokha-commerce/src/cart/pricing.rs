//! Cart subtotal computation under the combo offer.

use serde::{Deserialize, Serialize};

use crate::cart::LineItem;
use crate::money::Money;

/// A fixed-price bundle: `bundle_size` units at the promotional price
/// point ring up at a flat `bundle_price` instead of the per-unit sum.
///
/// Eligibility is by unit-price match, the rule the storefront shipped
/// with. It only fires when the eligible quantities sum to *exactly*
/// `bundle_size`; two eligible units, or four, price normally. There is
/// no support for multiple simultaneous bundles or partial bundles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComboOffer {
    /// Unit price that marks an item combo-eligible.
    pub unit_price: Money,
    /// Number of eligible units the bundle covers.
    pub bundle_size: i64,
    /// Flat price for the bundle.
    pub bundle_price: Money,
}

impl ComboOffer {
    /// Create an offer.
    pub fn new(unit_price: Money, bundle_size: i64, bundle_price: Money) -> Self {
        Self {
            unit_price,
            bundle_size,
            bundle_price,
        }
    }

    /// The launch promotion: any 3 pieces priced ₹325 for a flat ₹949.
    pub fn three_for_949() -> Self {
        Self::new(Money::rupees(325), 3, Money::rupees(949))
    }

    /// Whether a line item counts toward the bundle.
    pub fn eligible(&self, item: &LineItem) -> bool {
        item.unit_price == self.unit_price
    }

    /// Total quantity of eligible units across the cart.
    pub fn eligible_quantity(&self, items: &[LineItem]) -> i64 {
        items
            .iter()
            .filter(|i| self.eligible(i))
            .map(|i| i.quantity)
            .sum()
    }

    /// Whether the override applies to this cart.
    pub fn applies(&self, items: &[LineItem]) -> bool {
        self.eligible_quantity(items) == self.bundle_size
    }

    /// What the shopper saves when the bundle fires.
    pub fn savings(&self) -> Money {
        self.unit_price
            .multiply(self.bundle_size)
            .subtract(&self.bundle_price)
    }
}

impl Default for ComboOffer {
    fn default() -> Self {
        Self::three_for_949()
    }
}

/// Aggregate price of the cart under the offer.
///
/// When the offer applies, the eligible units ring up at the flat bundle
/// price and everything else is priced normally; otherwise the subtotal
/// is the plain `unit_price × quantity` sum over all lines.
pub fn subtotal(items: &[LineItem], offer: &ComboOffer) -> Money {
    let currency = offer.unit_price.currency;
    if offer.applies(items) {
        items
            .iter()
            .filter(|i| !offer.eligible(i))
            .fold(offer.bundle_price, |acc, i| acc.add(&i.line_total()))
    } else {
        items
            .iter()
            .fold(Money::zero(currency), |acc, i| acc.add(&i.line_total()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{ProductId, VariantId};

    fn line(product: &str, size: &str, price: i64, quantity: i64) -> LineItem {
        LineItem {
            product_id: ProductId::new(product),
            variant_id: VariantId::new(format!("{product}-black")),
            title: format!("Product {product}"),
            color_name: "Black".to_string(),
            color_hex: "#1E293B".to_string(),
            size: size.to_string(),
            unit_price: Money::rupees(price),
            quantity,
            image: String::new(),
        }
    }

    #[test]
    fn test_exactly_three_eligible_units_price_at_bundle() {
        let offer = ComboOffer::default();
        // 3 units across two lines, all at the promotional price point
        let items = vec![line("3", "M", 325, 2), line("4", "L", 325, 1)];
        assert!(offer.applies(&items));
        assert_eq!(subtotal(&items, &offer), Money::rupees(949));
    }

    #[test]
    fn test_rest_of_cart_prices_normally_alongside_bundle() {
        let offer = ComboOffer::default();
        let items = vec![line("3", "M", 325, 3), line("2", "L", 1199, 2)];
        assert_eq!(subtotal(&items, &offer), Money::rupees(949 + 2 * 1199));
    }

    #[test]
    fn test_two_eligible_units_no_override() {
        let offer = ComboOffer::default();
        let items = vec![line("3", "M", 325, 2), line("9", "L", 500, 2)];
        assert_eq!(subtotal(&items, &offer), Money::rupees(2 * 325 + 2 * 500));
    }

    #[test]
    fn test_four_eligible_units_no_override() {
        let offer = ComboOffer::default();
        let items = vec![line("3", "M", 325, 4)];
        assert!(!offer.applies(&items));
        assert_eq!(subtotal(&items, &offer), Money::rupees(1300));
    }

    #[test]
    fn test_empty_cart_subtotal_is_zero() {
        assert!(subtotal(&[], &ComboOffer::default()).is_zero());
    }

    #[test]
    fn test_savings() {
        // 3 × 325 = 975, bundle at 949
        assert_eq!(ComboOffer::default().savings(), Money::rupees(26));
    }

    #[test]
    fn test_custom_offer_parameters() {
        let offer = ComboOffer::new(Money::rupees(400), 2, Money::rupees(700));
        let items = vec![line("5", "M", 400, 2)];
        assert_eq!(subtotal(&items, &offer), Money::rupees(700));
    }
}
