//! Sample catalog data for first-run seeding.

use crate::models::CrackerProduct;

/// The four sample products inserted when the catalog is empty.
pub fn sample_products() -> Vec<CrackerProduct> {
    vec![
        CrackerProduct {
            name: "Sparklers Pack (10)".to_string(),
            description: Some(
                "Bright, long-lasting sparklers perfect for celebrations.".to_string(),
            ),
            price: 2.99,
            category: "Sparklers".to_string(),
            image: Some(
                "https://images.unsplash.com/photo-1519681393784-d120267933ba?q=80&w=800&auto=format&fit=crop"
                    .to_string(),
            ),
            in_stock: true,
            rating: Some(4.8),
        },
        CrackerProduct {
            name: "Flower Pots (Medium)".to_string(),
            description: Some(
                "Colorful fountain with safe height and vibrant effects.".to_string(),
            ),
            price: 4.5,
            category: "Flower Pots".to_string(),
            image: Some(
                "https://images.unsplash.com/photo-1508057198894-247b23fe5ade?q=80&w=800&auto=format&fit=crop"
                    .to_string(),
            ),
            in_stock: true,
            rating: Some(4.6),
        },
        CrackerProduct {
            name: "Ground Spinners (5)".to_string(),
            description: Some("Fun spinning wheels with multi-color trails.".to_string()),
            price: 3.25,
            category: "Ground Spinners".to_string(),
            image: Some(
                "https://images.unsplash.com/photo-1492684223066-81342ee5ff30?q=80&w=800&auto=format&fit=crop"
                    .to_string(),
            ),
            in_stock: true,
            rating: Some(4.4),
        },
        CrackerProduct {
            name: "Sky Rockets (3)".to_string(),
            description: Some("High-flying rockets with beautiful bursts.".to_string()),
            price: 7.99,
            category: "Rockets".to_string(),
            image: Some(
                "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?q=80&w=800&auto=format&fit=crop"
                    .to_string(),
            ),
            in_stock: true,
            rating: Some(4.7),
        },
    ]
}
