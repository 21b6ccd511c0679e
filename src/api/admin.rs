//! Admin- and owner-facing API functions

use crate::core::catalog::ProductCatalog;
use crate::core::error::Error;
use crate::gateway::OrderStore;
use crate::models::Order;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One row of the owner's restock report
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LowStockAlert {
    /// Identifier of the affected product
    pub product_id: String,
    /// Display name of the affected product
    pub product_name: String,
    /// Units currently available
    pub current_stock: u32,
    /// Threshold the stock has fallen below
    pub low_stock_threshold: u32,
}

/// API for the admin and owner dashboards: order review and inventory
/// alerting.
pub struct AdminApi {
    order_store: Arc<dyn OrderStore>,
    catalog: ProductCatalog,
}

impl AdminApi {
    /// Creates an AdminApi over the given order store and catalog
    pub fn new(order_store: Arc<dyn OrderStore>, catalog: ProductCatalog) -> Self {
        Self {
            order_store,
            catalog,
        }
    }

    /// All orders, newest first
    pub async fn list_orders(&self) -> Result<Vec<Order>> {
        self.order_store.list_orders().await
    }

    /// A single order by id
    pub async fn order(&self, order_id: &str) -> Result<Option<Order>> {
        self.order_store.fetch_order(order_id).await
    }

    /// Orders placed by one user, newest first
    pub async fn orders_for_user(&self, user_id: &str) -> Result<Vec<Order>> {
        self.order_store.orders_for_user(user_id).await
    }

    /// The catalog as the admin surface sees it
    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Restock alerts for every product running low
    pub fn low_stock_alerts(&self) -> Vec<LowStockAlert> {
        self.catalog
            .low_stock()
            .into_iter()
            .map(|product| LowStockAlert {
                product_id: product.id.clone(),
                product_name: product.name.clone(),
                current_stock: product.stock,
                low_stock_threshold: product.low_stock_threshold,
            })
            .collect()
    }

    /// Adjusts a product's low-stock threshold
    pub fn update_threshold(&mut self, product_id: &str, new_threshold: u32) -> Result<()> {
        if self.catalog.update_threshold(product_id, new_threshold) {
            Ok(())
        } else {
            Err(Error::InvalidData(format!(
                "Unknown product: {}",
                product_id
            )))
        }
    }
}
