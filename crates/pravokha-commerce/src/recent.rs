//! Recently-viewed product tracking.
//!
//! A small persisted most-recently-used list: the last few products the
//! shopper looked at, newest first, deduplicated by product id. Feeds the
//! "Recently Viewed" rail on product pages.

use serde::{Deserialize, Serialize};

use pravokha_kv::{Cache, KeyValueStore};

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Storage key the recently-viewed list persists under.
pub const RECENTLY_VIEWED_KEY: &str = "pravokha_recently_viewed";

/// How many products the list keeps.
pub const MAX_RECENTLY_VIEWED: usize = 8;

/// Display snapshot of a viewed product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewedProduct {
    pub product_id: ProductId,
    pub title: String,
    pub image: String,
    pub price: Money,
}

impl ViewedProduct {
    fn snapshot(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            title: product.title.clone(),
            image: product
                .variants
                .first()
                .map(|v| v.primary_image().to_string())
                .unwrap_or_default(),
            price: product.selling_price(),
        }
    }
}

/// The recently-viewed store. Same tolerant hydration as the cart: a
/// missing key or malformed payload starts the list empty.
pub struct RecentlyViewed<S> {
    cache: Cache<S>,
    key: String,
    entries: Vec<ViewedProduct>,
}

impl<S: KeyValueStore> RecentlyViewed<S> {
    /// Hydrate from the default storage key.
    pub fn open(cache: Cache<S>) -> Self {
        Self::with_key(cache, RECENTLY_VIEWED_KEY)
    }

    /// Hydrate from a specific storage key.
    pub fn with_key(cache: Cache<S>, key: impl Into<String>) -> Self {
        let key = key.into();
        let entries = cache
            .get::<Vec<ViewedProduct>>(&key)
            .ok()
            .flatten()
            .unwrap_or_default();
        Self {
            cache,
            key,
            entries,
        }
    }

    /// Record a product view: moves it to the front, dropping any older
    /// entry for the same product, and trims the list to its cap.
    pub fn record(&mut self, product: &Product) -> Result<(), CommerceError> {
        self.entries.retain(|e| e.product_id != product.id);
        self.entries.insert(0, ViewedProduct::snapshot(product));
        self.entries.truncate(MAX_RECENTLY_VIEWED);
        self.cache.set(&self.key, &self.entries).map_err(Into::into)
    }

    /// The snapshots, newest first.
    pub fn entries(&self) -> &[ViewedProduct] {
        &self.entries
    }

    /// Check if nothing has been viewed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;
    use pravokha_kv::MemoryStore;

    fn open() -> RecentlyViewed<MemoryStore> {
        RecentlyViewed::open(Cache::new(MemoryStore::new()))
    }

    #[test]
    fn test_newest_first() {
        let catalog = seed();
        let mut recent = open();
        recent.record(&catalog[0]).unwrap();
        recent.record(&catalog[1]).unwrap();
        assert_eq!(recent.entries()[0].product_id, catalog[1].id);
        assert_eq!(recent.entries()[1].product_id, catalog[0].id);
    }

    #[test]
    fn test_revisit_moves_to_front_without_duplicate() {
        let catalog = seed();
        let mut recent = open();
        recent.record(&catalog[0]).unwrap();
        recent.record(&catalog[1]).unwrap();
        recent.record(&catalog[0]).unwrap();
        assert_eq!(recent.entries().len(), 2);
        assert_eq!(recent.entries()[0].product_id, catalog[0].id);
    }

    #[test]
    fn test_capped_at_max() {
        let catalog = seed();
        let mut recent = open();
        // Cycle the seed catalog enough times to overflow the cap
        for round in 0..3 {
            for product in &catalog {
                let mut p = product.clone();
                p.id = ProductId::new(format!("{}-{round}", p.id));
                recent.record(&p).unwrap();
            }
        }
        assert_eq!(recent.entries().len(), MAX_RECENTLY_VIEWED);
    }

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::new();
        let catalog = seed();
        {
            let mut recent = RecentlyViewed::open(Cache::new(store.clone()));
            recent.record(&catalog[2]).unwrap();
        }
        let reloaded = RecentlyViewed::open(Cache::new(store));
        assert_eq!(reloaded.entries().len(), 1);
        assert_eq!(reloaded.entries()[0].title, "Essential Crew Tee");
        assert_eq!(reloaded.entries()[0].price, Money::rupees(325));
    }

    #[test]
    fn test_malformed_payload_starts_empty() {
        let store = MemoryStore::new();
        KeyValueStore::set(&store, RECENTLY_VIEWED_KEY, b"oops").unwrap();
        let recent = RecentlyViewed::open(Cache::new(store));
        assert!(recent.is_empty());
    }
}
