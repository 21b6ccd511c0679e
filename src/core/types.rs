//! Common data types and enums

use serde::{Deserialize, Serialize};

/// Order status enum
///
/// Orders carry their status as a free-form string in the store; this enum
/// covers the values the dashboards know how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// Order has been placed and confirmed
    Confirmed,
    /// Order is awaiting confirmation
    Pending,
    /// Order has been cancelled
    Cancelled,
}

impl OrderStatus {
    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Pending => "PENDING",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// Converts a string to an OrderStatus enum
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "CONFIRMED" => Some(OrderStatus::Confirmed),
            "PENDING" => Some(OrderStatus::Pending),
            "CANCELLED" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

/// Discount kind enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountKind {
    /// Coupon subtracts a percentage of the cart subtotal
    Percentage,
    /// Coupon subtracts a fixed amount
    FixedAmount,
}

impl DiscountKind {
    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountKind::Percentage => "PERCENTAGE",
            DiscountKind::FixedAmount => "FIXED_AMOUNT",
        }
    }

    /// Converts a string to a DiscountKind enum
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PERCENTAGE" => Some(DiscountKind::Percentage),
            "FIXED_AMOUNT" => Some(DiscountKind::FixedAmount),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_round_trip() {
        assert_eq!(OrderStatus::from_str("CONFIRMED"), Some(OrderStatus::Confirmed));
        assert_eq!(OrderStatus::from_str("pending"), Some(OrderStatus::Pending));
        assert_eq!(OrderStatus::from_str("SHIPPED"), None);
        assert_eq!(OrderStatus::Cancelled.as_str(), "CANCELLED");
    }

    #[test]
    fn test_discount_kind_serde_names() {
        let json = serde_json::to_string(&DiscountKind::FixedAmount).unwrap();
        assert_eq!(json, "\"FIXED_AMOUNT\"");

        let kind: DiscountKind = serde_json::from_str("\"PERCENTAGE\"").unwrap();
        assert_eq!(kind, DiscountKind::Percentage);
    }
}
