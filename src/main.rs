//! Food Order Gateway entry point
//!
//! Load config, initialize logging, wire stores and the checkout provider,
//! and serve the HTTP gateway.

use std::sync::Arc;

use food_order_gateway::checkout::stripe::StripeCheckout;
use food_order_gateway::config::AppConfig;
use food_order_gateway::gateway::{self, state::AppState};
use food_order_gateway::logging::init_logging;
use food_order_gateway::orders::memory::{MemoryOrderStore, MemoryUserStore};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _log_guard = init_logging(&config);

    tracing::info!("Starting food-order-gateway (env: {})", env);

    let order_store = Arc::new(MemoryOrderStore::new());
    let user_store = Arc::new(MemoryUserStore::new());
    let checkout = Arc::new(StripeCheckout::new(&config.checkout)?);

    let state = Arc::new(AppState::new(
        order_store,
        user_store,
        checkout,
        config.checkout.clone(),
    ));

    gateway::run_server(&config.gateway, state).await;
    Ok(())
}
