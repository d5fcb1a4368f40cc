use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Collection name for cracker products. Explicit, never derived from a
/// type name.
pub const COLLECTION: &str = "crackerproduct";

/// A firecracker product in the catalog.
///
/// This is the inbound/stored shape; stored documents additionally carry the
/// store-assigned `_id`, exposed externally as a string `id`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, JsonSchema)]
pub struct CrackerProduct {
    /// Display name of the cracker
    pub name: String,
    /// Short description
    pub description: Option<String>,
    /// Unit price in local currency
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// e.g. Sparklers, Flower Pots, Rockets
    pub category: String,
    /// Public image URL
    pub image: Option<String>,
    /// Whether available for sale
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Average rating
    #[serde(default = "default_rating")]
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
}

fn default_in_stock() -> bool {
    true
}

fn default_rating() -> Option<f64> {
    Some(4.5)
}

/// Query parameters for listing the catalog.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct CatalogQuery {
    /// Exact-match category filter
    pub category: Option<String>,
}

/// Response body for a created product.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductCreated {
    /// Hex string of the store-assigned ObjectId
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn product() -> CrackerProduct {
        CrackerProduct {
            name: "Sparklers Pack (10)".to_string(),
            description: None,
            price: 2.99,
            category: "Sparklers".to_string(),
            image: None,
            in_stock: true,
            rating: Some(4.8),
        }
    }

    #[test]
    fn test_valid_product_passes_validation() {
        assert!(product().validate().is_ok());
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let mut p = product();
        p.price = -0.01;
        let errors = p.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn test_rating_outside_bounds_is_rejected() {
        let mut p = product();
        p.rating = Some(5.5);
        let errors = p.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("rating"));

        p.rating = Some(-1.0);
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_absent_rating_passes_validation() {
        let mut p = product();
        p.rating = None;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_defaults_applied_on_deserialization() {
        let p: CrackerProduct = serde_json::from_str(
            r#"{"name": "Flower Pots", "price": 4.5, "category": "Flower Pots"}"#,
        )
        .unwrap();

        assert!(p.in_stock);
        assert_eq!(p.rating, Some(4.5));
    }
}
