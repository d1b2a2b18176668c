//! HTTP gateway: router wiring and server startup

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::GatewayConfig;
use crate::orders::handlers as order_handlers;
use state::AppState;

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    let order_routes = Router::new()
        .route("/place", post(order_handlers::place_order))
        .route("/verify", post(order_handlers::verify_order))
        .route("/userorders", post(order_handlers::user_orders))
        .route("/list", get(order_handlers::list_orders))
        .route("/status", post(order_handlers::update_status));

    Router::new()
        .route("/api/health", get(handlers::health_check))
        .nest("/api/order", order_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start the HTTP gateway server
pub async fn run_server(config: &GatewayConfig, state: Arc<AppState>) {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                config.port, config.port
            );
            std::process::exit(1);
        }
    };

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API Docs: http://{}/docs", addr);
    tracing::info!("Order API: /api/order/*");

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
