//! HTTP handlers for the order workflow
//!
//! Every endpoint answers HTTP 200 with the unified envelope. Any workflow
//! failure is logged here and collapsed into the uniform server-error
//! response; store, provider, and validation failures are indistinguishable
//! to the caller.

use axum::{Json, extract::State};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::gateway::state::AppState;
use crate::gateway::types::ApiResponse;

use super::error::OrderError;
use super::models::Order;
use super::service::VerifyOutcome;
use super::validation::{PlaceOrderRequest, validate_place_order};

// --- Requests ---

/// Strict boolean: accepts a JSON boolean or the transport strings
/// "true"/"false" (the payment redirect delivers the flag as a query-string
/// value); anything else is rejected at the serde layer.
fn deserialize_strict_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct StrictBoolVisitor;

    impl serde::de::Visitor<'_> for StrictBoolVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a boolean or \"true\"/\"false\"")
        }

        fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<bool, E> {
            match v {
                "true" => Ok(true),
                "false" => Ok(false),
                other => Err(E::invalid_value(
                    serde::de::Unexpected::Str(other),
                    &"\"true\" or \"false\"",
                )),
            }
        }
    }

    deserializer.deserialize_any(StrictBoolVisitor)
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOrderRequest {
    pub order_id: String,
    /// Payment outcome reported by the redirect
    #[serde(deserialize_with = "deserialize_strict_bool")]
    #[schema(value_type = bool)]
    pub success: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserOrdersRequest {
    pub user_id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub order_id: String,
    /// Free-text lifecycle label; any string is accepted
    pub status: String,
}

// --- Responses ---

#[derive(Debug, serde::Serialize, ToSchema)]
pub struct PlaceOrderData {
    /// Hosted checkout page to redirect the buyer to
    pub session_url: String,
}

fn server_error<T>(operation: &str, err: &OrderError) -> Json<ApiResponse<T>> {
    tracing::error!("{operation} failed: {err}");
    Json(ApiResponse::server_error())
}

// --- Handlers ---

/// Place an order and open a hosted checkout session
///
/// POST /api/order/place
#[utoipa::path(
    post,
    path = "/api/order/place",
    request_body = PlaceOrderRequest,
    responses(
        (status = 200, description = "Envelope with session_url, or uniform failure", body = PlaceOrderData, content_type = "application/json")
    ),
    tag = "Orders"
)]
pub async fn place_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PlaceOrderRequest>,
) -> Json<ApiResponse<PlaceOrderData>> {
    let result = match validate_place_order(req) {
        Ok(validated) => state.order_service().place_order(validated).await,
        Err(e) => Err(e.into()),
    };
    match result {
        Ok(session) => Json(ApiResponse::data(PlaceOrderData {
            session_url: session.url,
        })),
        Err(e) => server_error("place order", &e),
    }
}

/// Reconcile the payment outcome for an order
///
/// POST /api/order/verify
#[utoipa::path(
    post,
    path = "/api/order/verify",
    request_body = VerifyOrderRequest,
    responses(
        (status = 200, description = "\"Paid\" / \"Not Paid\" envelope, or uniform failure", content_type = "application/json")
    ),
    tag = "Orders"
)]
pub async fn verify_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VerifyOrderRequest>,
) -> Json<ApiResponse<()>> {
    match state
        .order_service()
        .verify_order(&req.order_id, req.success)
        .await
    {
        Ok(VerifyOutcome::Paid) => Json(ApiResponse::message("Paid")),
        Ok(VerifyOutcome::NotPaid) => Json(ApiResponse::rejected("Not Paid")),
        Err(e) => server_error("verify order", &e),
    }
}

/// List one user's orders
///
/// POST /api/order/userorders
#[utoipa::path(
    post,
    path = "/api/order/userorders",
    request_body = UserOrdersRequest,
    responses(
        (status = 200, description = "Envelope with the user's orders", body = Vec<Order>, content_type = "application/json")
    ),
    tag = "Orders"
)]
pub async fn user_orders(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UserOrdersRequest>,
) -> Json<ApiResponse<Vec<Order>>> {
    match state.order_service().user_orders(&req.user_id).await {
        Ok(orders) => Json(ApiResponse::data(orders)),
        Err(e) => server_error("list user orders", &e),
    }
}

/// List every order (admin)
///
/// GET /api/order/list
#[utoipa::path(
    get,
    path = "/api/order/list",
    responses(
        (status = 200, description = "Envelope with all orders", body = Vec<Order>, content_type = "application/json")
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Vec<Order>>> {
    match state.order_service().list_orders().await {
        Ok(orders) => Json(ApiResponse::data(orders)),
        Err(e) => server_error("list orders", &e),
    }
}

/// Overwrite an order's lifecycle label
///
/// POST /api/order/status
#[utoipa::path(
    post,
    path = "/api/order/status",
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "\"Status Updated\" envelope, or uniform failure", content_type = "application/json")
    ),
    tag = "Orders"
)]
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateStatusRequest>,
) -> Json<ApiResponse<()>> {
    match state
        .order_service()
        .update_status(&req.order_id, req.status)
        .await
    {
        Ok(()) => Json(ApiResponse::message("Status Updated")),
        Err(e) => server_error("update status", &e),
    }
}
