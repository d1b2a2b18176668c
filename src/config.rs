use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

/// Hosted checkout provider configuration (Stripe-compatible API)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CheckoutConfig {
    /// Base URL of the provider API
    pub api_base: String,
    /// Secret API key (never logged)
    pub secret_key: String,
    /// ISO currency code presented on the hosted checkout page
    pub currency: String,
    /// Frontend base URL: success redirect target and cancel-URL prefix
    pub frontend_url: String,
    /// Per-request timeout for provider calls
    pub request_timeout_secs: u64,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.stripe.com".to_string(),
            secret_key: String::new(),
            currency: "inr".to_string(),
            frontend_url: "https://fullstack-food-delivary-frontend.onrender.com".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    pub fn load(env: &str) -> Self {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));
        serde_yaml::from_str(&content).expect("Failed to parse config yaml")
    }
}
