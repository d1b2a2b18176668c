//! Food Order Gateway
//!
//! A thin HTTP gateway for an e-commerce order flow: place an order, redirect
//! the buyer to a hosted payment checkout, verify the payment result, and
//! list/query orders.
//!
//! # Modules
//!
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing setup (rolling file + stdout)
//! - [`orders`] - order workflow: documents, stores, validation, service, handlers
//! - [`checkout`] - hosted checkout provider boundary and line-item pricing
//! - [`gateway`] - axum router, shared state, response envelope, OpenAPI

pub mod checkout;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod orders;

// Convenient re-exports at crate root
pub use checkout::{CheckoutError, CheckoutProvider, CheckoutSession, LineItem};
pub use config::{AppConfig, CheckoutConfig, GatewayConfig};
pub use gateway::state::AppState;
pub use orders::{
    Order, OrderError, OrderFilter, OrderItem, OrderService, OrderStore, StoreError, UserStore,
    VerifyOutcome,
};
