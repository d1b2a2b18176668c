use std::sync::Arc;

use crate::checkout::CheckoutProvider;
use crate::config::CheckoutConfig;
use crate::orders::service::OrderService;
use crate::orders::store::{OrderStore, UserStore};

/// Shared gateway state
#[derive(Clone)]
pub struct AppState {
    pub order_store: Arc<dyn OrderStore>,
    pub user_store: Arc<dyn UserStore>,
    pub checkout: Arc<dyn CheckoutProvider>,
    pub checkout_config: CheckoutConfig,
}

impl AppState {
    pub fn new(
        order_store: Arc<dyn OrderStore>,
        user_store: Arc<dyn UserStore>,
        checkout: Arc<dyn CheckoutProvider>,
        checkout_config: CheckoutConfig,
    ) -> Self {
        Self {
            order_store,
            user_store,
            checkout,
            checkout_config,
        }
    }

    /// Workflow service over the shared collaborators
    pub fn order_service(&self) -> OrderService {
        OrderService::new(
            self.order_store.clone(),
            self.user_store.clone(),
            self.checkout.clone(),
            self.checkout_config.clone(),
        )
    }
}
