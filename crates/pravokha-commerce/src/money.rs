//! Money type for representing monetary values.
//!
//! Amounts are integers in whole currency units. The storefront prices
//! everything in whole rupees (₹325, ₹949, ₹1499), so there is no
//! fractional representation to get wrong.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in whole currency units.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a rupee amount.
    pub fn rupees(amount: i64) -> Self {
        Self::new(amount, Currency::INR)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Add another Money value.
    ///
    /// # Panics
    /// Panics if currencies don't match. Use `try_add` for fallible addition.
    pub fn add(&self, other: &Money) -> Money {
        self.try_add(other).expect("Currency mismatch in addition")
    }

    /// Try to add another Money value, returning None if currencies don't match.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(self.amount + other.amount, self.currency))
    }

    /// Subtract another Money value.
    ///
    /// # Panics
    /// Panics if currencies don't match.
    pub fn subtract(&self, other: &Money) -> Money {
        self.try_subtract(other)
            .expect("Currency mismatch in subtraction")
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(self.amount - other.amount, self.currency))
    }

    /// Multiply by a scalar.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount * factor, self.currency)
    }

    /// Calculate an integer percentage of this amount, rounded half-up.
    pub fn percent(&self, percent: i64) -> Money {
        Money::new((self.amount * percent + 50) / 100, self.currency)
    }

    /// Sum an iterator of Money values.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Money {
        iter.fold(Money::zero(currency), |acc, m| acc.add(*m))
    }

    /// Format as a display string (e.g., "₹949").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.amount)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::add(&self, &other)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::subtract(&self, &other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::rupees(325);
        assert_eq!(m.amount, 325);
        assert_eq!(m.currency, Currency::INR);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::rupees(949).display(), "\u{20b9}949");
        assert_eq!(Money::new(49, Currency::USD).display(), "$49");
    }

    #[test]
    fn test_money_addition() {
        let total = Money::rupees(325) + Money::rupees(500);
        assert_eq!(total.amount, 825);
    }

    #[test]
    fn test_money_subtraction() {
        let m = Money::rupees(975) - Money::rupees(949);
        assert_eq!(m.amount, 26);
    }

    #[test]
    fn test_money_multiply() {
        assert_eq!(Money::rupees(325).multiply(3).amount, 975);
    }

    #[test]
    fn test_money_percent_rounds_half_up() {
        // 18% of 949 is 170.82, which rounds to 171
        assert_eq!(Money::rupees(949).percent(18).amount, 171);
        // 18% of 325 is 58.5, which rounds to 59
        assert_eq!(Money::rupees(325).percent(18).amount, 59);
        // 18% of 100 is exactly 18
        assert_eq!(Money::rupees(100).percent(18).amount, 18);
    }

    #[test]
    fn test_money_sum() {
        let values = vec![Money::rupees(325), Money::rupees(500), Money::rupees(99)];
        let total = Money::sum(values.iter(), Currency::INR);
        assert_eq!(total.amount, 924);
    }

    #[test]
    fn test_try_add_currency_mismatch() {
        let inr = Money::rupees(100);
        let usd = Money::new(100, Currency::USD);
        assert_eq!(inr.try_add(&usd), None);
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_add_currency_mismatch_panics() {
        let _ = Money::rupees(100) + Money::new(100, Currency::USD);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("inr"), Some(Currency::INR));
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("XYZ"), None);
    }
}
