//! Shopper-facing API functions

use crate::config::StoreConfig;
use crate::core::cart::Cart;
use crate::core::checkout::{CheckoutFlow, SubmissionState};
use crate::core::coupon::{self, CouponBook};
use crate::gateway::{IdentityProvider, NotificationGateway, OrderStore};
use crate::models::{Coupon, PaymentMethod, Product};
use crate::Result;
use std::sync::Arc;

/// API for one shopper's session: their cart, their applied coupon, and
/// the checkout flow that turns both into an order.
pub struct ShopperApi {
    /// The session's cart
    cart: Cart,
    /// Offers the shopper can pick from
    coupon_book: CouponBook,
    /// The coupon currently applied, if any
    applied_coupon: Option<Coupon>,
    /// Checkout driver wired to the store's collaborators
    checkout: CheckoutFlow,
}

impl ShopperApi {
    /// Creates a ShopperApi with the given collaborators and the store's
    /// standard coupon offers
    pub fn new(
        order_store: Arc<dyn OrderStore>,
        notifier: Arc<dyn NotificationGateway>,
        identity: Arc<dyn IdentityProvider>,
        config: StoreConfig,
    ) -> Self {
        Self {
            cart: Cart::new(),
            coupon_book: CouponBook::standard_offers(),
            applied_coupon: None,
            checkout: CheckoutFlow::new(order_store, notifier, identity, config),
        }
    }

    /// Replaces the coupon catalog
    pub fn with_coupon_book(mut self, coupon_book: CouponBook) -> Self {
        self.coupon_book = coupon_book;
        self
    }

    /// The session's cart
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Adds one unit of the product to the cart
    pub fn add_to_cart(&mut self, product: &Product) {
        self.cart.add_item(product);
    }

    /// Removes one unit of the product from the cart
    pub fn remove_one_unit(&mut self, product_id: &str) {
        self.cart.remove_one_unit(product_id);
    }

    /// Removes the product's line from the cart entirely
    pub fn remove_line(&mut self, product_id: &str) {
        self.cart.remove_line(product_id);
    }

    /// The coupon currently applied, if any
    pub fn applied_coupon(&self) -> Option<&Coupon> {
        self.applied_coupon.as_ref()
    }

    /// Applies a coupon by its user-entered code.
    ///
    /// The code must match an active coupon and the cart must meet its
    /// minimum order amount. At most one coupon is applied at a time;
    /// applying a second replaces the first.
    pub fn apply_coupon_code(&mut self, code: &str) -> Result<Coupon> {
        let found = self.coupon_book.find_by_code(code)?.clone();
        coupon::evaluate(&found, self.cart.subtotal())?;
        self.applied_coupon = Some(found.clone());
        Ok(found)
    }

    /// Removes any applied coupon
    pub fn remove_coupon(&mut self) {
        self.applied_coupon = None;
    }

    /// The discount the applied coupon currently yields, clamped to the
    /// subtotal. Zero when no coupon is applied or the cart has dropped
    /// below the coupon's minimum.
    pub fn discount(&self) -> f64 {
        match &self.applied_coupon {
            Some(applied) => {
                let subtotal = self.cart.subtotal();
                coupon::evaluate(applied, subtotal)
                    .map(|discount| discount.min(subtotal))
                    .unwrap_or(0.0)
            }
            None => 0.0,
        }
    }

    /// Subtotal minus discount plus the flat delivery fee
    pub fn order_total(&self) -> f64 {
        self.cart.subtotal() - self.discount() + self.checkout.config().delivery_fee
    }

    /// Places the order. See [`CheckoutFlow::submit`] for the state
    /// transitions and their effects on the cart.
    pub async fn place_order(
        &mut self,
        payment_method: &PaymentMethod,
        delivery_address: &str,
    ) -> Result<String> {
        self.checkout
            .submit(
                &mut self.cart,
                self.applied_coupon.as_ref(),
                payment_method,
                delivery_address,
            )
            .await
    }

    /// The current submission state
    pub fn submission_state(&self) -> &SubmissionState {
        self.checkout.state()
    }

    /// Returns a terminal submission state to idle
    pub fn reset_submission(&mut self) {
        self.checkout.reset();
    }
}
