//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:4000/docs`
//! - OpenAPI JSON: `http://localhost:4000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::orders::handlers::{
    PlaceOrderData, UpdateStatusRequest, UserOrdersRequest, VerifyOrderRequest,
};
use crate::orders::models::{Order, OrderItem};
use crate::orders::validation::PlaceOrderRequest;

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Food Order Gateway API",
        version = "1.0.0",
        description = "Order placement, hosted checkout redirect, payment verification, and order listings.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:4000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::orders::handlers::place_order,
        crate::orders::handlers::verify_order,
        crate::orders::handlers::user_orders,
        crate::orders::handlers::list_orders,
        crate::orders::handlers::update_status,
    ),
    components(
        schemas(
            HealthResponse,
            Order,
            OrderItem,
            PlaceOrderRequest,
            PlaceOrderData,
            VerifyOrderRequest,
            UserOrdersRequest,
            UpdateStatusRequest,
        )
    ),
    tags(
        (name = "Orders", description = "Order workflow"),
        (name = "System", description = "Health and diagnostics")
    )
)]
pub struct ApiDoc;
