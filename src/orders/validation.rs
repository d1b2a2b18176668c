//! Placement request validation
//!
//! Explicit step between transport and workflow: handlers deserialize a
//! [`PlaceOrderRequest`], validate it here, and hand the workflow a
//! [`ValidatedPlaceOrder`]. Status updates are deliberately not validated
//! anywhere (any string is an accepted lifecycle label).

use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use super::models::OrderItem;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum OrderValidationError {
    #[error("user id must not be empty")]
    EmptyUserId,

    #[error("order must contain at least one item")]
    NoItems,

    #[error("item name must not be empty")]
    EmptyItemName,

    #[error("item quantity must be at least 1: '{0}'")]
    ZeroQuantity(String),

    #[error("item price must not be negative: '{0}'")]
    NegativePrice(String),

    #[error("order amount must not be negative")]
    NegativeAmount,
}

/// Order placement (HTTP request deserialization)
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub user_id: String,
    pub items: Vec<OrderItem>,
    /// Order total in major currency units
    #[schema(value_type = String, example = "100")]
    pub amount: Decimal,
    /// Free-form delivery address document
    #[schema(value_type = Object)]
    pub address: serde_json::Value,
}

/// Placement request that passed validation
#[derive(Debug)]
pub struct ValidatedPlaceOrder {
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub amount: Decimal,
    pub address: serde_json::Value,
}

/// Validate a placement request
pub fn validate_place_order(
    req: PlaceOrderRequest,
) -> Result<ValidatedPlaceOrder, OrderValidationError> {
    if req.user_id.trim().is_empty() {
        return Err(OrderValidationError::EmptyUserId);
    }
    if req.items.is_empty() {
        return Err(OrderValidationError::NoItems);
    }
    for item in &req.items {
        if item.name.trim().is_empty() {
            return Err(OrderValidationError::EmptyItemName);
        }
        if item.quantity == 0 {
            return Err(OrderValidationError::ZeroQuantity(item.name.clone()));
        }
        if item.price < Decimal::ZERO {
            return Err(OrderValidationError::NegativePrice(item.name.clone()));
        }
    }
    if req.amount < Decimal::ZERO {
        return Err(OrderValidationError::NegativeAmount);
    }

    Ok(ValidatedPlaceOrder {
        user_id: req.user_id,
        items: req.items,
        amount: req.amount,
        address: req.address,
    })
}
