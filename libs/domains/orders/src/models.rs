use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Collection name for orders.
pub const COLLECTION: &str = "order";

/// A line item within an order.
///
/// Carries snapshots of the product name and price at purchase time, so the
/// order stays self-contained. `product_id` is not checked against the
/// catalog; that referential gap is deliberate.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, JsonSchema)]
pub struct OrderItem {
    /// Referenced crackerproduct id as a hex string
    pub product_id: String,
    /// Snapshot of the product name
    pub name: String,
    /// Unit price at purchase time
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Quantity ordered
    #[validate(range(min = 1))]
    pub quantity: u32,
}

/// Customer contact details, embedded in the order.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, JsonSchema)]
pub struct CustomerInfo {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    pub address: String,
    pub city: String,
    pub pincode: String,
}

/// A customer order.
///
/// `items` is expected to be non-empty but deliberately not enforced, and
/// `status` is a plain string (pending, confirmed, shipped, delivered,
/// cancelled) rather than an enum; external tooling writes statuses this
/// service never sees.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, JsonSchema)]
pub struct Order {
    #[validate(nested)]
    pub items: Vec<OrderItem>,
    #[validate(nested)]
    pub customer: CustomerInfo,
    #[validate(range(min = 0.0))]
    pub total_amount: f64,
    #[serde(default = "default_status")]
    pub status: String,
    pub notes: Option<String>,
}

fn default_status() -> String {
    "pending".to_string()
}

/// Query parameters for listing orders.
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct OrdersQuery {
    /// Maximum number of orders returned
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

impl Default for OrdersQuery {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

/// Response body for a placed order.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderReceipt {
    /// Hex string of the store-assigned ObjectId
    pub order_id: String,
    /// Always "received" on successful placement
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn order() -> Order {
        Order {
            items: vec![OrderItem {
                product_id: "x".to_string(),
                name: "Sparklers Pack (10)".to_string(),
                price: 2.99,
                quantity: 2,
            }],
            customer: CustomerInfo {
                name: "A".to_string(),
                email: "a@b.com".to_string(),
                phone: None,
                address: "1 St".to_string(),
                city: "C".to_string(),
                pincode: "00000".to_string(),
            },
            total_amount: 5.98,
            status: "pending".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_valid_order_passes_validation() {
        assert!(order().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let mut o = order();
        o.customer.email = "not-an-email".to_string();
        assert!(o.validate().is_err());
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let mut o = order();
        o.items[0].quantity = 0;
        assert!(o.validate().is_err());
    }

    #[test]
    fn test_negative_total_is_rejected() {
        let mut o = order();
        o.total_amount = -5.98;
        let errors = o.validate().unwrap_err();
        assert!(errors.errors().contains_key("total_amount"));
    }

    #[test]
    fn test_empty_items_is_not_enforced() {
        let mut o = order();
        o.items.clear();
        assert!(o.validate().is_ok());
    }

    #[test]
    fn test_status_defaults_to_pending() {
        let o: Order = serde_json::from_str(
            r#"{
                "items": [],
                "customer": {
                    "name": "A", "email": "a@b.com",
                    "address": "1 St", "city": "C", "pincode": "00000"
                },
                "total_amount": 0.0
            }"#,
        )
        .unwrap();
        assert_eq!(o.status, "pending");
    }
}
