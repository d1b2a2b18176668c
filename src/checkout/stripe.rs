//! Stripe-compatible checkout session client
//!
//! Talks to `POST {api_base}/v1/checkout/sessions` with the form-encoded
//! nested-key parameter style the Stripe API uses. Only the session URL is
//! consumed from the response.

use async_trait::async_trait;
use serde::Deserialize;

use super::{CheckoutError, CheckoutProvider, CheckoutSession, LineItem};
use crate::config::CheckoutConfig;

pub struct StripeCheckout {
    client: reqwest::Client,
    api_base: String,
    secret_key: String,
}

impl StripeCheckout {
    pub fn new(config: &CheckoutConfig) -> Result<Self, CheckoutError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            secret_key: config.secret_key.clone(),
        })
    }
}

/// Session fields we consume; everything else in the body is ignored
#[derive(Debug, Deserialize)]
struct SessionResponse {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: Option<ProviderErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    message: Option<String>,
}

/// Flatten session parameters into Stripe's `a[b][c]=v` form encoding
fn encode_session_params(
    line_items: &[LineItem],
    success_url: &str,
    cancel_url: &str,
) -> Vec<(String, String)> {
    let mut params = vec![
        ("mode".to_string(), "payment".to_string()),
        ("success_url".to_string(), success_url.to_string()),
        ("cancel_url".to_string(), cancel_url.to_string()),
    ];

    for (i, line) in line_items.iter().enumerate() {
        params.push((
            format!("line_items[{i}][price_data][currency]"),
            line.currency.clone(),
        ));
        params.push((
            format!("line_items[{i}][price_data][product_data][name]"),
            line.name.clone(),
        ));
        params.push((
            format!("line_items[{i}][price_data][unit_amount]"),
            line.unit_amount_minor.to_string(),
        ));
        params.push((format!("line_items[{i}][quantity]"), line.quantity.to_string()));
    }

    params
}

#[async_trait]
impl CheckoutProvider for StripeCheckout {
    async fn create_session(
        &self,
        line_items: &[LineItem],
        success_url: &str,
        cancel_url: &str,
    ) -> Result<CheckoutSession, CheckoutError> {
        let params = encode_session_params(line_items, success_url, cancel_url);

        let response = self
            .client
            .post(format!("{}/v1/checkout/sessions", self.api_base))
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ProviderErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .and_then(|detail| detail.message)
                .unwrap_or_else(|| "no error detail".to_string());
            return Err(CheckoutError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let session: SessionResponse = response.json().await?;
        let url = session.url.ok_or(CheckoutError::MissingRedirectUrl)?;
        Ok(CheckoutSession { url })
    }
}
