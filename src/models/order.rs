use crate::core::types::OrderStatus;
use serde::{Deserialize, Serialize};

/// A snapshot of one cart line at the moment an order was placed.
///
/// Fields are copied from the catalog, not referenced, so later catalog
/// changes do not retroactively alter historical orders.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Identifier of the ordered product
    pub product_id: String,
    /// Product display name at time of purchase
    pub product_name: String,
    /// Quantity ordered
    pub quantity: u32,
    /// Unit price at time of purchase
    pub price: f64,
}

impl OrderLine {
    /// Creates a new OrderLine
    pub fn new(product_id: String, product_name: String, quantity: u32, price: f64) -> Self {
        Self {
            product_id,
            product_name,
            quantity,
            price,
        }
    }

    /// Total for this line
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Represents a placed order.
///
/// Wire names are camelCase to match the payload the notification webhooks
/// consume. Once persisted, the line snapshots are immutable.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier for the order
    pub order_id: String,
    /// Identifier of the user who placed the order
    pub user_id: String,
    /// Customer display name captured at submission
    pub customer_name: String,
    /// Customer email captured at submission
    pub customer_email: String,
    /// Customer phone captured at submission
    pub customer_phone: String,
    /// Ordered line snapshots
    pub items: Vec<OrderLine>,
    /// Total amount charged, including delivery fee and minus any discount
    pub total_amount: f64,
    /// Current status of the order (e.g., "CONFIRMED", "PENDING", "CANCELLED")
    pub status: String,
    /// Label of the payment method used
    pub payment_method: String,
    /// Delivery address string captured at submission
    pub delivery_address: String,
    /// Unix timestamp when the order was created
    pub created_timestamp: u64,
}

impl Order {
    /// Creates a new confirmed Order with required fields
    pub fn new(
        order_id: String,
        user_id: String,
        items: Vec<OrderLine>,
        total_amount: f64,
        payment_method: String,
        created_timestamp: u64,
    ) -> Self {
        Self {
            order_id,
            user_id,
            customer_name: String::new(),
            customer_email: String::new(),
            customer_phone: String::new(),
            items,
            total_amount,
            status: OrderStatus::Confirmed.as_str().to_string(),
            payment_method,
            delivery_address: String::new(),
            created_timestamp,
        }
    }

    /// Sets the customer contact snapshot
    pub fn with_customer(mut self, name: String, email: String, phone: String) -> Self {
        self.customer_name = name;
        self.customer_email = email;
        self.customer_phone = phone;
        self
    }

    /// Sets the delivery address
    pub fn with_delivery_address(mut self, delivery_address: String) -> Self {
        self.delivery_address = delivery_address;
        self
    }

    /// Updates the current status of the order
    pub fn update_status(&mut self, new_status: &str) {
        self.status = new_status.to_string();
    }

    /// Sum of quantities across all lines
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }
}
