//! End-to-end order lifecycle: place -> checkout session -> verify -> status.

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use food_order_gateway::checkout::mock::MockCheckout;
use food_order_gateway::checkout::pricing::DELIVERY_LINE_NAME;
use food_order_gateway::config::CheckoutConfig;
use food_order_gateway::orders::memory::{MemoryOrderStore, MemoryUserStore};
use food_order_gateway::orders::models::{OrderItem, User};
use food_order_gateway::orders::service::{OrderService, VerifyOutcome};
use food_order_gateway::orders::validation::ValidatedPlaceOrder;

fn service_with(
    users: Arc<MemoryUserStore>,
    checkout: Arc<MockCheckout>,
) -> OrderService {
    OrderService::new(
        Arc::new(MemoryOrderStore::new()),
        users,
        checkout,
        CheckoutConfig {
            frontend_url: "https://shop.example".to_string(),
            currency: "inr".to_string(),
            ..CheckoutConfig::default()
        },
    )
}

fn placement(user_id: &str) -> ValidatedPlaceOrder {
    ValidatedPlaceOrder {
        user_id: user_id.to_string(),
        items: vec![
            OrderItem {
                name: "Pizza".to_string(),
                price: Decimal::from(10),
                quantity: 2,
            },
            OrderItem {
                name: "Garlic Bread".to_string(),
                price: Decimal::from(4),
                quantity: 1,
            },
        ],
        amount: Decimal::from(24),
        address: serde_json::json!({
            "street": "1 Main St",
            "city": "Pune",
            "zipcode": "411001"
        }),
    }
}

#[tokio::test]
async fn full_lifecycle_paid_order() {
    let users = Arc::new(MemoryUserStore::new());
    let checkout = Arc::new(MockCheckout::new());
    users.insert(User {
        user_id: "u1".to_string(),
        cart_data: HashMap::from([("pizza-1".to_string(), 2), ("bread-3".to_string(), 1)]),
    });

    let service = service_with(users.clone(), checkout.clone());

    // Place: order persisted unpaid, cart cleared, session returned
    let session = service.place_order(placement("u1")).await.unwrap();
    assert!(!session.url.is_empty());
    assert!(users.get("u1").unwrap().cart_data.is_empty());

    let orders = service.user_orders("u1").await.unwrap();
    assert_eq!(orders.len(), 1);
    let order = &orders[0];
    assert!(!order.payment);
    assert_eq!(order.status, "Food Processing");

    // Provider call carries both item lines plus the delivery line, and the
    // cancel URL names the order
    let calls = checkout.recorded();
    assert_eq!(calls.len(), 1);
    let lines = &calls[0].line_items;
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].unit_amount_minor, 80_000); // 10 x 100 x 80
    assert_eq!(lines[1].unit_amount_minor, 32_000); // 4 x 100 x 80
    assert_eq!(lines[2].name, DELIVERY_LINE_NAME);
    assert_eq!(lines[2].unit_amount_minor, 16_000);
    let minor_total: u64 = lines
        .iter()
        .map(|l| l.unit_amount_minor * u64::from(l.quantity))
        .sum();
    assert_eq!(minor_total, (10 * 2 + 4) * 8000 + 16_000);
    assert!(calls[0].cancel_url.ends_with(&format!(
        "/verify?success=false&orderId={}",
        order.order_id
    )));

    // Verify success: flag set, record kept
    let outcome = service.verify_order(&order.order_id, true).await.unwrap();
    assert_eq!(outcome, VerifyOutcome::Paid);
    let order = &service.user_orders("u1").await.unwrap()[0];
    assert!(order.payment);

    // Admin moves the order along
    service
        .update_status(&order.order_id, "Out for delivery".to_string())
        .await
        .unwrap();
    assert_eq!(
        service.list_orders().await.unwrap()[0].status,
        "Out for delivery"
    );
}

#[tokio::test]
async fn full_lifecycle_cancelled_order() {
    let users = Arc::new(MemoryUserStore::new());
    let checkout = Arc::new(MockCheckout::new());
    users.insert(User {
        user_id: "u2".to_string(),
        cart_data: HashMap::new(),
    });

    let service = service_with(users, checkout);
    service.place_order(placement("u2")).await.unwrap();
    let order_id = service.user_orders("u2").await.unwrap()[0].order_id.clone();

    let outcome = service.verify_order(&order_id, false).await.unwrap();
    assert_eq!(outcome, VerifyOutcome::NotPaid);
    assert!(service.user_orders("u2").await.unwrap().is_empty());
    assert!(service.list_orders().await.unwrap().is_empty());
}
