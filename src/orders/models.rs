//! Order and user documents as the store holds them
//!
//! - [`Order`] / [`OrderItem`]: persisted order record
//! - [`User`]: cart owner (only the cart is touched here)
//! - [`OrderPatch`] / [`UserPatch`] / [`OrderFilter`]: partial-update and
//!   query documents consumed by the store traits

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Status stamped on every freshly placed order
pub const DEFAULT_ORDER_STATUS: &str = "Food Processing";

/// One purchasable unit inside an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    pub name: String,
    /// Unit price in major currency units
    #[schema(value_type = String, example = "10")]
    pub price: Decimal,
    pub quantity: u32,
}

/// Persisted order record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub order_id: String,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    /// Order total in major currency units
    #[schema(value_type = String, example = "100")]
    pub amount: Decimal,
    /// Delivery address as the client submitted it (free-form document)
    #[schema(value_type = Object)]
    pub address: serde_json::Value,
    /// Payment confirmed flag; false until a successful verification
    pub payment: bool,
    /// Free-text lifecycle label
    #[schema(example = "Food Processing")]
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Build a new unpaid order with a fresh id and default status
    pub fn new(
        user_id: String,
        items: Vec<OrderItem>,
        amount: Decimal,
        address: serde_json::Value,
    ) -> Self {
        Self {
            order_id: uuid::Uuid::new_v4().to_string(),
            user_id,
            items,
            amount,
            address,
            payment: false,
            status: DEFAULT_ORDER_STATUS.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Cart owner record; only `cart_data` is ever mutated by this service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    /// Item id -> quantity
    pub cart_data: HashMap<String, u32>,
}

/// Partial update for an order; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub payment: Option<bool>,
    pub status: Option<String>,
}

impl OrderPatch {
    pub fn payment(confirmed: bool) -> Self {
        Self {
            payment: Some(confirmed),
            ..Self::default()
        }
    }

    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }
}

/// Partial update for a user; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub cart_data: Option<HashMap<String, u32>>,
}

impl UserPatch {
    /// Reset the cart to empty (the only patch this service issues)
    pub fn clear_cart() -> Self {
        Self {
            cart_data: Some(HashMap::new()),
        }
    }
}

/// Order query filter
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub user_id: Option<String>,
}

impl OrderFilter {
    /// Match every order
    pub fn all() -> Self {
        Self::default()
    }

    /// Match orders owned by one user
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }
}
