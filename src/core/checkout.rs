//! Order submission state machine
//!
//! Drives a checkout attempt through validation, persistence, and the
//! post-success notification fan-out. One `CheckoutFlow` serves one
//! shopping session; the UI layer is expected to disable the submit
//! trigger while a submission is in flight.

use crate::config::StoreConfig;
use crate::core::cart::Cart;
use crate::core::coupon;
use crate::core::error::Error;
use crate::gateway::{IdentityProvider, NotificationGateway, OrderStore};
use crate::models::{Coupon, Order, OrderLine, PaymentMethod};
use crate::Result;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Observable state of a single order submission attempt.
///
/// Transient: it exists only for the duration of one attempt and is never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    /// No submission in progress
    Idle,
    /// The order is being written to the order store
    Submitting,
    /// The order was persisted; carries the generated order id
    Succeeded(String),
    /// The submission failed; carries a user-facing reason
    Failed(String),
}

/// Checkout driver wired to its collaborators at construction time
pub struct CheckoutFlow {
    order_store: Arc<dyn OrderStore>,
    notifier: Arc<dyn NotificationGateway>,
    identity: Arc<dyn IdentityProvider>,
    config: StoreConfig,
    state: SubmissionState,
}

impl CheckoutFlow {
    /// Creates a CheckoutFlow with the given collaborators
    pub fn new(
        order_store: Arc<dyn OrderStore>,
        notifier: Arc<dyn NotificationGateway>,
        identity: Arc<dyn IdentityProvider>,
        config: StoreConfig,
    ) -> Self {
        Self {
            order_store,
            notifier,
            identity,
            config,
            state: SubmissionState::Idle,
        }
    }

    /// The current submission state
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// The store configuration this flow was built with
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Submits the cart as an order.
    ///
    /// Validation failures (no signed-in user, empty cart, coupon no longer
    /// eligible) move straight to `Failed` without ever entering
    /// `Submitting`, and leave the cart untouched.
    ///
    /// On persistence success the flow transitions to `Succeeded`, the cart
    /// is cleared as part of that transition, and three best-effort
    /// notification calls are dispatched on background tasks. On
    /// persistence failure the flow transitions to `Failed` and the cart is
    /// left intact so the user can retry.
    pub async fn submit(
        &mut self,
        cart: &mut Cart,
        applied_coupon: Option<&Coupon>,
        payment_method: &PaymentMethod,
        delivery_address: &str,
    ) -> Result<String> {
        let user = match self.identity.current_user() {
            Some(user) => user,
            None => return self.fail(Error::Unauthenticated),
        };

        if cart.is_empty() {
            return self.fail(Error::EmptyCart);
        }

        // Re-evaluate the coupon against the cart as it stands now; it may
        // have been applied when the cart was larger.
        let subtotal = cart.subtotal();
        let discount = match applied_coupon {
            Some(coupon) => match coupon::evaluate(coupon, subtotal) {
                Ok(discount) => discount.min(subtotal),
                Err(e) => return self.fail(e),
            },
            None => 0.0,
        };

        self.state = SubmissionState::Submitting;

        // Generate a unique order id
        let order_id = generate_order_id();

        // Snapshot the cart lines into immutable order-line records
        let items: Vec<OrderLine> = cart
            .lines()
            .iter()
            .map(|line| {
                OrderLine::new(
                    line.product.id.clone(),
                    line.product.name.clone(),
                    line.quantity,
                    line.product.price,
                )
            })
            .collect();

        let total_amount = subtotal - discount + self.config.delivery_fee;

        let order = Order::new(
            order_id.clone(),
            user.user_id.clone(),
            items,
            total_amount,
            payment_method.name.clone(),
            Utc::now().timestamp() as u64,
        )
        .with_customer(
            user.customer_name(),
            user.customer_email(),
            user.customer_phone(),
        )
        .with_delivery_address(delivery_address.to_string());

        match self.order_store.save_order(&order).await {
            Ok(()) => {
                log::info!("Order placed successfully: {}", order_id);
                self.state = SubmissionState::Succeeded(order_id.clone());
                cart.clear();
                self.dispatch_notifications(order);
                Ok(order_id)
            }
            Err(e) => {
                log::error!("Error placing order {}: {}", order_id, e);
                self.state = SubmissionState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Returns a terminal state to `Idle`. Invoked by the UI after it has
    /// shown the outcome; the flow never resets itself.
    pub fn reset(&mut self) {
        self.state = SubmissionState::Idle;
    }

    fn fail(&mut self, error: Error) -> Result<String> {
        self.state = SubmissionState::Failed(error.to_string());
        Err(error)
    }

    /// Fires the three post-success notification calls.
    ///
    /// Each runs on its own task with no ordering between them; outcomes
    /// are logged and otherwise discarded. The order is already placed, so
    /// nothing here can roll it back.
    fn dispatch_notifications(&self, order: Order) {
        let order = Arc::new(order);

        let notifier = Arc::clone(&self.notifier);
        let o = Arc::clone(&order);
        tokio::spawn(async move {
            match notifier.notify_customer(&o).await {
                Ok(()) => log::info!("Order notification sent for {}", o.order_id),
                Err(e) => log::warn!("Failed to send order notification for {}: {}", o.order_id, e),
            }
        });

        let notifier = Arc::clone(&self.notifier);
        let o = Arc::clone(&order);
        tokio::spawn(async move {
            match notifier.trigger_processing(&o).await {
                Ok(()) => log::info!("Order processing triggered for {}", o.order_id),
                Err(e) => log::warn!(
                    "Failed to trigger order processing for {}: {}",
                    o.order_id,
                    e
                ),
            }
        });

        let notifier = Arc::clone(&self.notifier);
        let o = Arc::clone(&order);
        tokio::spawn(async move {
            match notifier.trigger_inventory_update(&o).await {
                Ok(()) => log::info!("Inventory update triggered for {}", o.order_id),
                Err(e) => log::warn!(
                    "Failed to trigger inventory update for {}: {}",
                    o.order_id,
                    e
                ),
            }
        });
    }
}

/// Generates an order identifier in the store's `ORDER_XXXXXXXX` format
fn generate_order_id() -> String {
    let uuid = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("ORDER_{}", &uuid[..8])
}
