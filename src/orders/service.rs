//! Order workflow - business logic behind the HTTP handlers
//!
//! Sequential per request: every store/provider await runs to completion
//! before the next starts, and an already-applied side effect (order saved,
//! cart cleared) is not rolled back when a later step fails.

use std::sync::Arc;

use super::error::OrderError;
use super::models::{Order, OrderFilter, OrderPatch, UserPatch};
use super::store::{OrderStore, UserStore};
use super::validation::ValidatedPlaceOrder;
use crate::checkout::{CheckoutProvider, CheckoutSession, pricing};
use crate::config::CheckoutConfig;

/// Outcome of a payment verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Payment confirmed; the order was marked paid
    Paid,
    /// Payment failed or was cancelled; the order was deleted
    NotPaid,
}

pub struct OrderService {
    orders: Arc<dyn OrderStore>,
    users: Arc<dyn UserStore>,
    checkout: Arc<dyn CheckoutProvider>,
    config: CheckoutConfig,
}

impl OrderService {
    pub fn new(
        orders: Arc<dyn OrderStore>,
        users: Arc<dyn UserStore>,
        checkout: Arc<dyn CheckoutProvider>,
        config: CheckoutConfig,
    ) -> Self {
        Self {
            orders,
            users,
            checkout,
            config,
        }
    }

    /// Place an order: persist it unpaid, clear the buyer's cart, and open a
    /// hosted checkout session. Returns the session for the redirect.
    pub async fn place_order(
        &self,
        req: ValidatedPlaceOrder,
    ) -> Result<CheckoutSession, OrderError> {
        let order = Order::new(req.user_id, req.items, req.amount, req.address);
        tracing::info!(
            "Place Order {}: {} item(s) for user {}",
            order.order_id,
            order.items.len(),
            order.user_id
        );

        let order = self.orders.create(order).await?;

        // Cart reset is a side effect of placement; an unknown user resolves
        // to None and is not an error
        self.users
            .update(&order.user_id, UserPatch::clear_cart())
            .await?;

        let line_items = pricing::build_line_items(&order.items, &self.config.currency)?;

        let success_url = self.config.frontend_url.clone();
        let cancel_url = format!(
            "{}/verify?success=false&orderId={}",
            self.config.frontend_url, order.order_id
        );

        let session = self
            .checkout
            .create_session(&line_items, &success_url, &cancel_url)
            .await?;

        tracing::info!("Place Order {}: checkout session opened", order.order_id);
        Ok(session)
    }

    /// Reconcile the payment outcome: mark the order paid, or delete it.
    /// A missing order id resolves without effect, matching the store's
    /// patch/delete contract.
    pub async fn verify_order(
        &self,
        order_id: &str,
        success: bool,
    ) -> Result<VerifyOutcome, OrderError> {
        if success {
            self.orders
                .update(order_id, OrderPatch::payment(true))
                .await?;
            tracing::info!("Verify Order {}: paid", order_id);
            Ok(VerifyOutcome::Paid)
        } else {
            self.orders.delete(order_id).await?;
            tracing::info!("Verify Order {}: not paid, order deleted", order_id);
            Ok(VerifyOutcome::NotPaid)
        }
    }

    /// Every order owned by one user, regardless of payment flag or status
    pub async fn user_orders(&self, user_id: &str) -> Result<Vec<Order>, OrderError> {
        Ok(self.orders.find(OrderFilter::for_user(user_id)).await?)
    }

    /// Every order in the store (admin listing)
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self.orders.find(OrderFilter::all()).await?)
    }

    /// Overwrite the lifecycle label; any string is accepted
    pub async fn update_status(&self, order_id: &str, status: String) -> Result<(), OrderError> {
        tracing::info!("Update Status {}: '{}'", order_id, status);
        self.orders
            .update(order_id, OrderPatch::status(status))
            .await?;
        Ok(())
    }
}
