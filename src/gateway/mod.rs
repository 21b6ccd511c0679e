//! Collaborator interfaces for persistence, notifications, and identity
//!
//! The checkout flow receives these as constructor-supplied dependencies;
//! there is no global registry or singleton access anywhere in the crate.

pub mod memory;
pub mod webhook;

pub use memory::{InMemoryOrderStore, SessionIdentity};
pub use webhook::WebhookNotificationGateway;

use crate::models::{Order, UserProfile};
use crate::Result;
use async_trait::async_trait;

/// Durable storage for placed orders.
///
/// A successful `save_order` is the durability guarantee the checkout flow
/// relies on before reporting an order as placed.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists an order keyed by its generated identifier
    async fn save_order(&self, order: &Order) -> Result<()>;

    /// Fetches a single order by id
    async fn fetch_order(&self, order_id: &str) -> Result<Option<Order>>;

    /// All orders, newest first
    async fn list_orders(&self) -> Result<Vec<Order>>;

    /// Orders placed by one user, newest first
    async fn orders_for_user(&self, user_id: &str) -> Result<Vec<Order>>;
}

/// One-way notification calls made after an order is placed.
///
/// Each call is independent best-effort delivery: no response body is
/// consumed and failures never affect the already-placed order.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Notifies the customer that their order was placed
    async fn notify_customer(&self, order: &Order) -> Result<()>;

    /// Triggers downstream order processing
    async fn trigger_processing(&self, order: &Order) -> Result<()>;

    /// Triggers an inventory adjustment for the ordered quantities
    async fn trigger_inventory_update(&self, order: &Order) -> Result<()>;
}

/// Access to the signed-in user, if any
pub trait IdentityProvider: Send + Sync {
    /// The currently signed-in user's profile, or None when signed out
    fn current_user(&self) -> Option<UserProfile>;
}
