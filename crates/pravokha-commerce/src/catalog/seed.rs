//! Demo catalog data.

use crate::ids::{ProductId, VariantId};
use crate::money::Money;

use super::{Product, ProductVariant, SizeStock};

fn variant(id: &str, color_name: &str, color_hex: &str, sizes: &[(&str, u32)]) -> ProductVariant {
    ProductVariant {
        id: VariantId::new(id),
        color_name: color_name.to_string(),
        color_hex: color_hex.to_string(),
        images: vec![
            "/api/placeholder/800/800".to_string(),
            "/api/placeholder/800/800".to_string(),
        ],
        sizes: sizes
            .iter()
            .map(|(size, stock)| SizeStock {
                size: (*size).to_string(),
                stock: *stock,
            })
            .collect(),
    }
}

/// The demo catalog: the apparel line the storefront launched with,
/// including the ₹325 pieces covered by the 3-for-₹949 combo.
pub fn seed() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            sku: "CCT-001".to_string(),
            title: "Classic Cotton Tee".to_string(),
            slug: "classic-cotton-tee".to_string(),
            description: "Premium quality cotton t-shirt with a comfortable fit. \
                          Breathable fabric that keeps you cool all day."
                .to_string(),
            price: Money::rupees(999),
            discount_price: Some(Money::rupees(799)),
            category: "t-shirts".to_string(),
            rating: 4.5,
            reviews: 128,
            variants: vec![
                variant(
                    "1-teal",
                    "Teal",
                    "#0F6B66",
                    &[("S", 10), ("M", 15), ("L", 20), ("XL", 8)],
                ),
                variant(
                    "1-black",
                    "Black",
                    "#1E293B",
                    &[("S", 12), ("M", 18), ("L", 15), ("XL", 10)],
                ),
                variant(
                    "1-white",
                    "White",
                    "#F8FAFC",
                    &[("S", 20), ("M", 25), ("L", 18), ("XL", 12)],
                ),
                variant(
                    "1-coral",
                    "Coral",
                    "#FF6B61",
                    &[("S", 8), ("M", 12), ("L", 10), ("XL", 5)],
                ),
            ],
            featured: true,
            new_arrival: true,
        },
        Product {
            id: ProductId::new("2"),
            sku: "ATP-001".to_string(),
            title: "Athletic Track Pants".to_string(),
            slug: "athletic-track-pants".to_string(),
            description: "Comfortable track pants with moisture-wicking fabric, \
                          elastic waistband and side pockets."
                .to_string(),
            price: Money::rupees(1499),
            discount_price: Some(Money::rupees(1199)),
            category: "track-pants".to_string(),
            rating: 4.7,
            reviews: 95,
            variants: vec![
                variant(
                    "2-black",
                    "Black",
                    "#1E293B",
                    &[("S", 15), ("M", 20), ("L", 18), ("XL", 12)],
                ),
                variant(
                    "2-navy",
                    "Navy Blue",
                    "#1E3A5F",
                    &[("S", 10), ("M", 16), ("L", 14), ("XL", 9)],
                ),
            ],
            featured: true,
            new_arrival: false,
        },
        Product {
            id: ProductId::new("3"),
            sku: "ECT-001".to_string(),
            title: "Essential Crew Tee".to_string(),
            slug: "essential-crew-tee".to_string(),
            description: "Everyday crew-neck tee in soft combed cotton. \
                          Part of the 3-for-\u{20b9}949 combo."
                .to_string(),
            price: Money::rupees(325),
            discount_price: None,
            category: "t-shirts".to_string(),
            rating: 4.3,
            reviews: 64,
            variants: vec![
                variant(
                    "3-white",
                    "White",
                    "#F8FAFC",
                    &[("S", 30), ("M", 40), ("L", 35), ("XL", 20)],
                ),
                variant(
                    "3-black",
                    "Black",
                    "#1E293B",
                    &[("S", 25), ("M", 35), ("L", 30), ("XL", 18)],
                ),
                variant(
                    "3-olive",
                    "Olive",
                    "#556B2F",
                    &[("S", 12), ("M", 20), ("L", 16), ("XL", 10)],
                ),
            ],
            featured: false,
            new_arrival: true,
        },
        Product {
            id: ProductId::new("4"),
            sku: "EDS-001".to_string(),
            title: "Everyday Shorts".to_string(),
            slug: "everyday-shorts".to_string(),
            description: "Lightweight cotton shorts with a drawstring waist. \
                          Part of the 3-for-\u{20b9}949 combo."
                .to_string(),
            price: Money::rupees(325),
            discount_price: None,
            category: "shorts".to_string(),
            rating: 4.4,
            reviews: 41,
            variants: vec![
                variant(
                    "4-grey",
                    "Grey",
                    "#6B7280",
                    &[("S", 14), ("M", 22), ("L", 18), ("XL", 8)],
                ),
                variant(
                    "4-black",
                    "Black",
                    "#1E293B",
                    &[("S", 16), ("M", 24), ("L", 20), ("XL", 10)],
                ),
            ],
            featured: false,
            new_arrival: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_combo_eligible_products() {
        let combo: Vec<_> = seed()
            .into_iter()
            .filter(|p| p.selling_price() == Money::rupees(325))
            .collect();
        assert!(combo.len() >= 2);
        // Mix-and-match across categories
        assert!(combo.iter().any(|p| p.category == "t-shirts"));
        assert!(combo.iter().any(|p| p.category == "shorts"));
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let products = seed();
        for (i, a) in products.iter().enumerate() {
            for b in products.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_every_variant_carries_sizes() {
        for product in seed() {
            assert!(!product.variants.is_empty(), "{} has no variants", product.sku);
            for variant in &product.variants {
                assert!(!variant.sizes.is_empty());
                assert!(!variant.images.is_empty());
            }
        }
    }
}
