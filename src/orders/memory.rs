//! DashMap-backed document stores
//!
//! Default wiring for the gateway and the store used by tests. Listing is
//! ordered by creation time so repeated queries are stable.

use async_trait::async_trait;
use dashmap::DashMap;

use super::models::{Order, OrderFilter, OrderPatch, User, UserPatch};
use super::store::{OrderStore, StoreError, UserStore};

#[derive(Default)]
pub struct MemoryOrderStore {
    orders: DashMap<String, Order>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn create(&self, order: Order) -> Result<Order, StoreError> {
        self.orders.insert(order.order_id.clone(), order.clone());
        Ok(order)
    }

    async fn update(&self, order_id: &str, patch: OrderPatch) -> Result<Option<Order>, StoreError> {
        match self.orders.get_mut(order_id) {
            Some(mut entry) => {
                if let Some(payment) = patch.payment {
                    entry.payment = payment;
                }
                if let Some(status) = patch.status {
                    entry.status = status;
                }
                Ok(Some(entry.value().clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, order_id: &str) -> Result<Option<Order>, StoreError> {
        Ok(self.orders.remove(order_id).map(|(_, order)| order))
    }

    async fn find(&self, filter: OrderFilter) -> Result<Vec<Order>, StoreError> {
        let mut found: Vec<Order> = self
            .orders
            .iter()
            .filter(|entry| match &filter.user_id {
                Some(user_id) => entry.user_id == *user_id,
                None => true,
            })
            .map(|entry| entry.value().clone())
            .collect();
        found.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.order_id.cmp(&b.order_id))
        });
        Ok(found)
    }
}

#[derive(Default)]
pub struct MemoryUserStore {
    users: DashMap<String, User>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user record (account creation itself is out of scope here)
    pub fn insert(&self, user: User) {
        self.users.insert(user.user_id.clone(), user);
    }

    pub fn get(&self, user_id: &str) -> Option<User> {
        self.users.get(user_id).map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn update(&self, user_id: &str, patch: UserPatch) -> Result<Option<User>, StoreError> {
        match self.users.get_mut(user_id) {
            Some(mut entry) => {
                if let Some(cart_data) = patch.cart_data {
                    entry.cart_data = cart_data;
                }
                Ok(Some(entry.value().clone()))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::collections::HashMap;

    fn sample_order(user_id: &str) -> Order {
        Order::new(
            user_id.to_string(),
            vec![super::super::models::OrderItem {
                name: "Pizza".to_string(),
                price: Decimal::from(10),
                quantity: 2,
            }],
            Decimal::from(100),
            serde_json::json!({"street": "1 Main St", "city": "Pune"}),
        )
    }

    #[tokio::test]
    async fn create_then_find_by_user() {
        let store = MemoryOrderStore::new();
        let a = store.create(sample_order("u1")).await.unwrap();
        store.create(sample_order("u2")).await.unwrap();

        let mine = store.find(OrderFilter::for_user("u1")).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].order_id, a.order_id);

        let all = store.find(OrderFilter::all()).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn update_patches_only_given_fields() {
        let store = MemoryOrderStore::new();
        let order = store.create(sample_order("u1")).await.unwrap();

        let updated = store
            .update(&order.order_id, OrderPatch::payment(true))
            .await
            .unwrap()
            .unwrap();
        assert!(updated.payment);
        assert_eq!(updated.status, "Food Processing");

        let updated = store
            .update(&order.order_id, OrderPatch::status("Out for delivery"))
            .await
            .unwrap()
            .unwrap();
        assert!(updated.payment);
        assert_eq!(updated.status, "Out for delivery");
    }

    #[tokio::test]
    async fn update_and_delete_missing_id_resolve_none() {
        let store = MemoryOrderStore::new();
        assert!(
            store
                .update("missing", OrderPatch::payment(true))
                .await
                .unwrap()
                .is_none()
        );
        assert!(store.delete("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let store = MemoryOrderStore::new();
        let order = store.create(sample_order("u1")).await.unwrap();

        let removed = store.delete(&order.order_id).await.unwrap();
        assert_eq!(removed.unwrap().order_id, order.order_id);
        assert!(store.find(OrderFilter::all()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn clear_cart_resets_to_empty() {
        let store = MemoryUserStore::new();
        let mut cart = HashMap::new();
        cart.insert("item-1".to_string(), 3);
        store.insert(User {
            user_id: "u1".to_string(),
            cart_data: cart,
        });

        let updated = store
            .update("u1", UserPatch::clear_cart())
            .await
            .unwrap()
            .unwrap();
        assert!(updated.cart_data.is_empty());
        assert!(store.get("u1").unwrap().cart_data.is_empty());
    }
}
