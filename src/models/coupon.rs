use crate::core::types::DiscountKind;
use serde::{Deserialize, Serialize};

/// Represents a discount coupon from the store's static offer catalog
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Coupon {
    /// Unique identifier for the coupon
    pub id: String,
    /// Code the customer enters; matched case-insensitively
    pub code: String,
    /// Short human-readable title
    pub title: String,
    /// Longer description shown alongside the offer
    pub description: String,
    /// Discount value: a percentage for `Percentage`, an absolute amount for
    /// `FixedAmount`
    pub discount: f64,
    /// How the discount value is interpreted
    pub kind: DiscountKind,
    /// Minimum cart subtotal required to qualify
    pub min_order_amount: f64,
    /// Upper bound on the computed discount; only meaningful for `Percentage`
    pub max_discount: f64,
    /// Whether the coupon can currently be applied
    pub active: bool,
}

impl Coupon {
    /// Creates a new Coupon with no minimum, no cap, and active by default
    pub fn new(id: String, code: String, title: String, discount: f64, kind: DiscountKind) -> Self {
        Self {
            id,
            code,
            title,
            description: String::new(),
            discount,
            kind,
            min_order_amount: 0.0,
            max_discount: f64::MAX,
            active: true,
        }
    }

    /// Sets the description
    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }

    /// Sets the minimum order amount required to qualify
    pub fn with_min_order_amount(mut self, min_order_amount: f64) -> Self {
        self.min_order_amount = min_order_amount;
        self
    }

    /// Sets the maximum discount cap
    pub fn with_max_discount(mut self, max_discount: f64) -> Self {
        self.max_discount = max_discount;
        self
    }

    /// Marks the coupon inactive
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coupon_builder() {
        let coupon = Coupon::new(
            "1".to_string(),
            "SAVE10".to_string(),
            "Save 10%".to_string(),
            10.0,
            DiscountKind::Percentage,
        )
        .with_description("Get 10% off on orders above $20".to_string())
        .with_min_order_amount(20.0)
        .with_max_discount(50.0);

        assert_eq!(coupon.code, "SAVE10");
        assert_eq!(coupon.discount, 10.0);
        assert_eq!(coupon.kind, DiscountKind::Percentage);
        assert_eq!(coupon.min_order_amount, 20.0);
        assert_eq!(coupon.max_discount, 50.0);
        assert!(coupon.active);
    }

    #[test]
    fn test_defaults() {
        let coupon = Coupon::new(
            "4".to_string(),
            "FREESHIP".to_string(),
            "Free Shipping".to_string(),
            2.99,
            DiscountKind::FixedAmount,
        );

        assert_eq!(coupon.min_order_amount, 0.0);
        assert_eq!(coupon.max_discount, f64::MAX);
        assert!(coupon.description.is_empty());
    }
}
