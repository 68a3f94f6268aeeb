//! Commerce domain types and cart logic for the Pravokha storefront.
//!
//! - **Catalog**: products, color variants, per-size stock, seed data
//! - **Cart**: the cart store: duplicate-merging line items, combo
//!   pricing, session persistence, UI notices
//! - **Checkout**: shipping/tax totals, contact validation, orders
//! - **Recently viewed**: small persisted MRU list of product snapshots
//!
//! # Example
//!
//! ```rust
//! use pravokha_commerce::prelude::*;
//! use pravokha_kv::{Cache, MemoryStore};
//!
//! let catalog = pravokha_commerce::catalog::seed();
//! let mut cart = CartStore::open(Cache::new(MemoryStore::new()));
//!
//! // Shopper picks a variant and size; the catalog snapshots the price
//! let tee = &catalog[0];
//! let variant_id = tee.variants[0].id.clone();
//! let pick = tee.select(&variant_id, "M").unwrap();
//! cart.add_item(pick).unwrap();
//!
//! assert_eq!(cart.item_count(), 1);
//! println!("Subtotal: {}", cart.subtotal());
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ids;
pub mod money;
pub mod notify;
pub mod recent;

pub use error::CommerceError;
pub use ids::{OrderId, ProductId, VariantId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{OrderId, ProductId, VariantId};
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Product, ProductVariant, SizeStock};

    // Cart
    pub use crate::cart::{
        CartStore, ComboOffer, LineItem, LineItemKey, ProductSelection, CART_STORAGE_KEY,
    };

    // Notifications
    pub use crate::notify::{Notice, Notifier, NullNotifier};

    // Checkout
    pub use crate::checkout::{
        CheckoutTotals, Order, PaymentMethod, ShippingContact, ValidationIssue,
    };

    // Recently viewed
    pub use crate::recent::{RecentlyViewed, ViewedProduct, MAX_RECENTLY_VIEWED};
}
