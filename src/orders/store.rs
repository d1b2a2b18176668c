//! Document-store boundary for orders and users
//!
//! The workflow only consumes this contract: create, patch-by-id,
//! delete-by-id, and filtered find. Patch and delete resolve to `None` when
//! the id is unknown; that is not an error at this boundary.

use async_trait::async_trait;
use thiserror::Error;

use super::models::{Order, OrderFilter, OrderPatch, User, UserPatch};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a new order and return the stored record
    async fn create(&self, order: Order) -> Result<Order, StoreError>;

    /// Apply a partial update; `None` if no such order
    async fn update(&self, order_id: &str, patch: OrderPatch) -> Result<Option<Order>, StoreError>;

    /// Remove an order; returns the removed record, `None` if no such order
    async fn delete(&self, order_id: &str) -> Result<Option<Order>, StoreError>;

    /// All orders matching the filter
    async fn find(&self, filter: OrderFilter) -> Result<Vec<Order>, StoreError>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Apply a partial update; `None` if no such user
    async fn update(&self, user_id: &str, patch: UserPatch) -> Result<Option<User>, StoreError>;
}
