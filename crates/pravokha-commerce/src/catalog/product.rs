//! Product and variant types.

use crate::cart::ProductSelection;
use crate::ids::{ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Stock on hand for one size of a variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SizeStock {
    /// Size label (e.g., "M").
    pub size: String,
    /// Units in stock.
    pub stock: u32,
}

/// A color/style option of a product, with its own images and size table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductVariant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Display color name (e.g., "Teal").
    pub color_name: String,
    /// Hex swatch for the color picker.
    pub color_hex: String,
    /// Image URLs for this variant.
    pub images: Vec<String>,
    /// Available sizes with stock counts.
    pub sizes: Vec<SizeStock>,
}

impl ProductVariant {
    /// Stock for a size label, if the variant carries that size.
    pub fn stock_for(&self, size: &str) -> Option<u32> {
        self.sizes.iter().find(|s| s.size == size).map(|s| s.stock)
    }

    /// Check whether a size is currently purchasable.
    pub fn in_stock(&self, size: &str) -> bool {
        self.stock_for(size).is_some_and(|stock| stock > 0)
    }

    /// Primary image for listings and cart rows.
    pub fn primary_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or_default()
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Stock keeping unit.
    pub sku: String,
    /// Product name.
    pub title: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Full description.
    pub description: String,
    /// List price in whole currency units.
    pub price: Money,
    /// Discounted price, when on sale.
    pub discount_price: Option<Money>,
    /// Category slug (e.g., "t-shirts").
    pub category: String,
    /// Average review rating.
    pub rating: f32,
    /// Number of reviews.
    pub reviews: u32,
    /// Color/style variants.
    pub variants: Vec<ProductVariant>,
    /// Shown in the featured rail.
    pub featured: bool,
    /// Shown in the new-arrivals rail.
    pub new_arrival: bool,
}

impl Product {
    /// Look up a variant by ID.
    pub fn variant(&self, variant_id: &VariantId) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| &v.id == variant_id)
    }

    /// The price a shopper pays right now.
    pub fn selling_price(&self) -> Money {
        self.discount_price.unwrap_or(self.price)
    }

    /// Whether the product is on sale.
    pub fn on_sale(&self) -> bool {
        self.discount_price.is_some()
    }

    /// Build the add-to-cart snapshot for a variant and size.
    ///
    /// Captures display attributes and the current selling price; the cart
    /// holds on to this snapshot even if the catalog changes later.
    /// Returns `None` when the variant is unknown or doesn't carry the
    /// size. Stock is deliberately not checked here; callers gate on
    /// [`ProductVariant::in_stock`] before adding.
    pub fn select(&self, variant_id: &VariantId, size: &str) -> Option<ProductSelection> {
        let variant = self.variant(variant_id)?;
        variant.stock_for(size)?;
        Some(ProductSelection {
            product_id: self.id.clone(),
            variant_id: variant.id.clone(),
            title: self.title.clone(),
            color_name: variant.color_name.clone(),
            color_hex: variant.color_hex.clone(),
            size: size.to_string(),
            unit_price: self.selling_price(),
            image: variant.primary_image().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;

    fn tee() -> Product {
        seed()
            .into_iter()
            .find(|p| p.slug == "classic-cotton-tee")
            .expect("seed catalog has the classic tee")
    }

    #[test]
    fn test_variant_lookup() {
        let product = tee();
        assert!(product.variant(&VariantId::new("1-teal")).is_some());
        assert!(product.variant(&VariantId::new("1-chartreuse")).is_none());
    }

    #[test]
    fn test_selling_price_prefers_discount() {
        let mut product = tee();
        assert_eq!(product.selling_price(), Money::rupees(799));
        product.discount_price = None;
        assert_eq!(product.selling_price(), Money::rupees(999));
    }

    #[test]
    fn test_stock_lookup() {
        let product = tee();
        let variant = product.variant(&VariantId::new("1-teal")).unwrap();
        assert_eq!(variant.stock_for("M"), Some(15));
        assert_eq!(variant.stock_for("XXL"), None);
        assert!(variant.in_stock("M"));
    }

    #[test]
    fn test_select_snapshots_display_attributes() {
        let product = tee();
        let pick = product.select(&VariantId::new("1-teal"), "M").unwrap();
        assert_eq!(pick.title, "Classic Cotton Tee");
        assert_eq!(pick.color_name, "Teal");
        assert_eq!(pick.color_hex, "#0F6B66");
        assert_eq!(pick.size, "M");
        assert_eq!(pick.unit_price, Money::rupees(799));
    }

    #[test]
    fn test_select_unknown_variant_or_size() {
        let product = tee();
        assert!(product.select(&VariantId::new("9-none"), "M").is_none());
        assert!(product.select(&VariantId::new("1-teal"), "XXL").is_none());
    }
}
