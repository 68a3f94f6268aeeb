//! The cart store and its line items.

use serde::{Deserialize, Serialize};

use pravokha_kv::{Cache, KeyValueStore};

use crate::cart::{pricing, ComboOffer};
use crate::error::CommerceError;
use crate::ids::{ProductId, VariantId};
use crate::money::Money;
use crate::notify::{Notice, Notifier, NullNotifier};

/// Storage key the cart persists under.
pub const CART_STORAGE_KEY: &str = "pravokha-cart";

/// One distinct (product, variant, size) selection with a quantity.
///
/// Serialized field names keep the storage payload's historical camelCase
/// spelling (`productId`, `colorHex`, `price`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Catalog product identifier.
    pub product_id: ProductId,
    /// Color/style variant identifier.
    pub variant_id: VariantId,
    /// Product name, snapshotted at add time.
    pub title: String,
    /// Variant color name, snapshotted at add time.
    pub color_name: String,
    /// Variant color swatch, snapshotted at add time.
    pub color_hex: String,
    /// Selected size label.
    pub size: String,
    /// Unit price at add time; catalog price changes don't reach the cart.
    #[serde(rename = "price")]
    pub unit_price: Money,
    /// Always ≥ 1; a line at zero is removed, not kept.
    pub quantity: i64,
    /// Display image, snapshotted at add time.
    pub image: String,
}

impl LineItem {
    /// The identity tuple of this line.
    pub fn key(&self) -> LineItemKey {
        LineItemKey {
            product_id: self.product_id.clone(),
            variant_id: self.variant_id.clone(),
            size: self.size.clone(),
        }
    }

    /// `unit_price × quantity` for this line.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }

    fn matches(&self, key: &LineItemKey) -> bool {
        self.product_id == key.product_id
            && self.variant_id == key.variant_id
            && self.size == key.size
    }
}

/// The tuple that identifies a line item within a cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineItemKey {
    pub product_id: ProductId,
    pub variant_id: VariantId,
    pub size: String,
}

impl LineItemKey {
    /// Create a key.
    pub fn new(
        product_id: impl Into<ProductId>,
        variant_id: impl Into<VariantId>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            variant_id: variant_id.into(),
            size: size.into(),
        }
    }
}

/// What the shopper picked: a line item minus its quantity.
///
/// Produced by [`Product::select`]; the catalog fills in the display
/// snapshot and the current selling price.
///
/// [`Product::select`]: crate::catalog::Product::select
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSelection {
    pub product_id: ProductId,
    pub variant_id: VariantId,
    pub title: String,
    pub color_name: String,
    pub color_hex: String,
    pub size: String,
    pub unit_price: Money,
    pub image: String,
}

impl ProductSelection {
    fn key(&self) -> LineItemKey {
        LineItemKey {
            product_id: self.product_id.clone(),
            variant_id: self.variant_id.clone(),
            size: self.size.clone(),
        }
    }

    fn into_line_item(self, quantity: i64) -> LineItem {
        LineItem {
            product_id: self.product_id,
            variant_id: self.variant_id,
            title: self.title,
            color_name: self.color_name,
            color_hex: self.color_hex,
            size: self.size,
            unit_price: self.unit_price,
            quantity,
            image: self.image,
        }
    }
}

/// The shopping cart: an insertion-ordered sequence of line items plus the
/// transient drawer-open flag.
///
/// Explicitly owned and injected, never an ambient global. The
/// store hydrates once from its storage key at construction (empty when
/// the key is missing or the payload is malformed) and re-serializes the
/// full item sequence on every mutation.
pub struct CartStore<S> {
    cache: Cache<S>,
    key: String,
    items: Vec<LineItem>,
    open: bool,
    offer: ComboOffer,
    notifier: Box<dyn Notifier>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Hydrate a cart from the default storage key.
    pub fn open(cache: Cache<S>) -> Self {
        Self::with_key(cache, CART_STORAGE_KEY)
    }

    /// Hydrate a cart from a specific storage key.
    ///
    /// Missing or malformed persisted data yields an empty cart; stale
    /// payloads are discarded silently rather than surfaced.
    pub fn with_key(cache: Cache<S>, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = cache
            .get::<Vec<LineItem>>(&key)
            .ok()
            .flatten()
            .unwrap_or_default();
        Self {
            cache,
            key,
            items,
            open: false,
            offer: ComboOffer::default(),
            notifier: Box::new(NullNotifier),
        }
    }

    /// Replace the combo offer (defaults to the 3-for-₹949 launch promo).
    pub fn with_offer(mut self, offer: ComboOffer) -> Self {
        self.offer = offer;
        self
    }

    /// Install a notification receiver (defaults to discarding notices).
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Add a selection to the cart.
    ///
    /// A selection matching an existing line's (product, variant, size)
    /// tuple bumps that line's quantity by one; anything else is appended
    /// with quantity 1, preserving insertion order. Opens the cart drawer
    /// so the UI surfaces the change. Stock is the caller's problem,
    /// checked against the catalog before calling, never here.
    pub fn add_item(&mut self, selection: ProductSelection) -> Result<(), CommerceError> {
        let key = selection.key();
        let notice = match self.items.iter_mut().find(|i| i.matches(&key)) {
            Some(existing) => {
                existing.quantity += 1;
                Notice::new(
                    "Updated cart",
                    format!("{} quantity updated", existing.title),
                )
            }
            None => {
                let notice = Notice::new(
                    "Added to cart",
                    format!(
                        "{} ({}, {}) added to cart",
                        selection.title, selection.color_name, selection.size
                    ),
                );
                self.items.push(selection.into_line_item(1));
                notice
            }
        };
        self.persist()?;
        self.notifier.notify(notice);
        self.open = true;
        Ok(())
    }

    /// Remove the line matching `key`, if present.
    ///
    /// Removing an absent line is a no-op, not an error.
    pub fn remove_item(&mut self, key: &LineItemKey) -> Result<(), CommerceError> {
        self.items.retain(|i| !i.matches(key));
        self.persist()?;
        self.notifier
            .notify(Notice::new("Removed from cart", "Item removed from your cart"));
        Ok(())
    }

    /// Set the matching line's quantity to exactly `quantity`.
    ///
    /// A quantity of zero or less removes the line entirely, a deliberate
    /// policy rather than an error path. Updating an absent line is a no-op.
    pub fn update_quantity(
        &mut self,
        key: &LineItemKey,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return self.remove_item(key);
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.matches(key)) {
            item.quantity = quantity;
        }
        self.persist()
    }

    /// Empty the cart in one step.
    pub fn clear(&mut self) -> Result<(), CommerceError> {
        self.items.clear();
        self.persist()?;
        self.notifier
            .notify(Notice::new("Cart cleared", "All items removed from cart"));
        Ok(())
    }

    /// The line items, in insertion order. Read by the checkout flow.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Total unit count (sum of quantities), the badge number.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Aggregate price under the combo offer.
    pub fn subtotal(&self) -> Money {
        pricing::subtotal(&self.items, &self.offer)
    }

    /// The offer this cart prices under.
    pub fn offer(&self) -> &ComboOffer {
        &self.offer
    }

    /// Whether the combo override currently applies.
    pub fn combo_applied(&self) -> bool {
        self.offer.applies(&self.items)
    }

    /// Whether the cart drawer is open. Not persisted.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open or close the cart drawer.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    fn persist(&self) -> Result<(), CommerceError> {
        self.cache.set(&self.key, &self.items).map_err(Into::into)
    }
}
