//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Domain mutations themselves have no failure modes (absent-tuple removes
/// and updates are no-ops, malformed persisted data hydrates as empty);
/// what can fail is writing state back to storage and the checkout-side
/// validations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Persistence layer failure.
    #[error("Storage error: {0}")]
    Storage(#[from] pravokha_kv::KvError),

    /// Checkout attempted with an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Shipping contact failed validation.
    #[error("Validation failed: {0}")]
    Validation(String),
}
