//! Unified API response envelope
//!
//! Every business endpoint answers HTTP 200 with this shape:
//! - `success`: whether the operation took effect
//! - `message`: short human-readable outcome (when there is no payload)
//! - `data`: payload (when there is one)
//!
//! Failures of any kind collapse to `{success: false, message: "Server
//! Error"}`; internal detail stays in the log.

use serde::Serialize;
use utoipa::ToSchema;

/// Uniform message for every internal failure crossing the boundary
pub const SERVER_ERROR_MESSAGE: &str = "Server Error";

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Success with a payload
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Success with a message only
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Business rejection (e.g. payment not completed)
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Uniform internal-failure response
    pub fn server_error() -> Self {
        Self::rejected(SERVER_ERROR_MESSAGE)
    }
}
