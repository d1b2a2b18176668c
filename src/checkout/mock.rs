//! Recording checkout provider double for tests

use async_trait::async_trait;
use std::sync::Mutex;

use super::{CheckoutError, CheckoutProvider, CheckoutSession, LineItem};

/// One recorded `create_session` call
#[derive(Debug, Clone)]
pub struct RecordedSession {
    pub line_items: Vec<LineItem>,
    pub success_url: String,
    pub cancel_url: String,
}

/// Provider double: records every call and answers with a fixed URL.
/// Flip `fail` to make every call error, for exercising the server-error
/// path without a network.
#[derive(Default)]
pub struct MockCheckout {
    pub sessions: Mutex<Vec<RecordedSession>>,
    pub fail: bool,
}

impl MockCheckout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            sessions: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn recorded(&self) -> Vec<RecordedSession> {
        self.sessions.lock().unwrap().clone()
    }
}

#[async_trait]
impl CheckoutProvider for MockCheckout {
    async fn create_session(
        &self,
        line_items: &[LineItem],
        success_url: &str,
        cancel_url: &str,
    ) -> Result<CheckoutSession, CheckoutError> {
        if self.fail {
            return Err(CheckoutError::Provider {
                status: 503,
                message: "mock provider down".to_string(),
            });
        }
        self.sessions.lock().unwrap().push(RecordedSession {
            line_items: line_items.to_vec(),
            success_url: success_url.to_string(),
            cancel_url: cancel_url.to_string(),
        });
        Ok(CheckoutSession {
            url: "https://checkout.mock/session/1".to_string(),
        })
    }
}
