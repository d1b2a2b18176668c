//! Hosted checkout provider boundary
//!
//! The workflow hands the provider a priced line-item list and two redirect
//! URLs and gets back a session URL to send the buyer to. Nothing from the
//! session is persisted.
//!
//! - [`pricing`]: fixed minor-unit/exchange-rate math and line-item building
//! - [`stripe`]: Stripe-compatible HTTP client
//! - [`mock`]: recording provider for tests

pub mod mock;
pub mod pricing;
pub mod stripe;

use async_trait::async_trait;
use thiserror::Error;

/// Provider-facing representation of one charged line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub name: String,
    /// Unit price in the currency's minor units
    pub unit_amount_minor: u64,
    pub currency: String,
    pub quantity: u32,
}

/// Ephemeral provider-issued session; lives only for one request/response
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    /// Hosted payment page the buyer is redirected to
    pub url: String,
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider rejected the session ({status}): {message}")]
    Provider { status: u16, message: String },

    #[error("provider returned no redirect url")]
    MissingRedirectUrl,

    #[error("line amount not representable in minor units: {0}")]
    InvalidAmount(String),
}

#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Create a hosted checkout session in payment mode
    async fn create_session(
        &self,
        line_items: &[LineItem],
        success_url: &str,
        cancel_url: &str,
    ) -> Result<CheckoutSession, CheckoutError>;
}
