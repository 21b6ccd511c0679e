//! In-memory collaborator implementations
//!
//! Used by the demos and tests; a deployment substitutes its own
//! `OrderStore` backed by a real document database.

use super::{IdentityProvider, OrderStore};
use crate::core::error::Error;
use crate::models::{Order, UserProfile};
use crate::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// Order store backed by a process-local map
#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<String, Order>>,
}

impl InMemoryOrderStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of orders currently held
    pub fn len(&self) -> usize {
        match self.orders.read() {
            Ok(orders) => orders.len(),
            Err(_) => 0,
        }
    }

    /// Whether the store holds no orders
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn sorted_newest_first(mut orders: Vec<Order>) -> Vec<Order> {
        orders.sort_by(|a, b| b.created_timestamp.cmp(&a.created_timestamp));
        orders
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn save_order(&self, order: &Order) -> Result<()> {
        let mut orders = self
            .orders
            .write()
            .map_err(|_| Error::Persistence("order store lock poisoned".to_string()))?;
        orders.insert(order.order_id.clone(), order.clone());
        Ok(())
    }

    async fn fetch_order(&self, order_id: &str) -> Result<Option<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|_| Error::Persistence("order store lock poisoned".to_string()))?;
        Ok(orders.get(order_id).cloned())
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|_| Error::Persistence("order store lock poisoned".to_string()))?;
        Ok(Self::sorted_newest_first(orders.values().cloned().collect()))
    }

    async fn orders_for_user(&self, user_id: &str) -> Result<Vec<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|_| Error::Persistence("order store lock poisoned".to_string()))?;
        Ok(Self::sorted_newest_first(
            orders
                .values()
                .filter(|order| order.user_id == user_id)
                .cloned()
                .collect(),
        ))
    }
}

/// Identity provider holding the session's signed-in user, if any
#[derive(Default)]
pub struct SessionIdentity {
    user: RwLock<Option<UserProfile>>,
}

impl SessionIdentity {
    /// Creates a signed-out session
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Creates a session already signed in as the given user
    pub fn signed_in(profile: UserProfile) -> Self {
        Self {
            user: RwLock::new(Some(profile)),
        }
    }

    /// Signs the given user in, replacing any previous session
    pub fn sign_in(&self, profile: UserProfile) {
        if let Ok(mut user) = self.user.write() {
            *user = Some(profile);
        }
    }

    /// Signs the current user out
    pub fn sign_out(&self) {
        if let Ok(mut user) = self.user.write() {
            *user = None;
        }
    }
}

impl IdentityProvider for SessionIdentity {
    fn current_user(&self) -> Option<UserProfile> {
        match self.user.read() {
            Ok(user) => user.clone(),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderLine;

    fn order(order_id: &str, user_id: &str, created_timestamp: u64) -> Order {
        Order::new(
            order_id.to_string(),
            user_id.to_string(),
            vec![OrderLine::new(
                "P001".to_string(),
                "Paracetamol 500mg".to_string(),
                1,
                9.99,
            )],
            12.98,
            "Cash on Delivery".to_string(),
            created_timestamp,
        )
    }

    #[tokio::test]
    async fn test_save_and_fetch() {
        let store = InMemoryOrderStore::new();
        store.save_order(&order("ORDER_AAAA1111", "user-1", 100)).await.unwrap();

        let fetched = store.fetch_order("ORDER_AAAA1111").await.unwrap().unwrap();
        assert_eq!(fetched.user_id, "user-1");

        assert!(store.fetch_order("ORDER_MISSING0").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_listing_is_newest_first_and_filtered() {
        let store = InMemoryOrderStore::new();
        store.save_order(&order("ORDER_AAAA1111", "user-1", 100)).await.unwrap();
        store.save_order(&order("ORDER_BBBB2222", "user-2", 300)).await.unwrap();
        store.save_order(&order("ORDER_CCCC3333", "user-1", 200)).await.unwrap();

        let all = store.list_orders().await.unwrap();
        let ids: Vec<&str> = all.iter().map(|o| o.order_id.as_str()).collect();
        assert_eq!(ids, vec!["ORDER_BBBB2222", "ORDER_CCCC3333", "ORDER_AAAA1111"]);

        let mine = store.orders_for_user("user-1").await.unwrap();
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0].order_id, "ORDER_CCCC3333");
    }

    #[test]
    fn test_session_identity_lifecycle() {
        let session = SessionIdentity::signed_out();
        assert!(session.current_user().is_none());

        session.sign_in(UserProfile::new("user-1".to_string()));
        assert_eq!(session.current_user().unwrap().user_id, "user-1");

        session.sign_out();
        assert!(session.current_user().is_none());
    }
}
