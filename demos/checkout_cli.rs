//! Example walkthrough of a shopping session, from browsing to checkout

use medcart::{
    api::{AdminApi, ShopperApi},
    config::StoreConfig,
    core::catalog::ProductCatalog,
    gateway::{InMemoryOrderStore, SessionIdentity, WebhookNotificationGateway},
    models::{PaymentMethod, UserProfile},
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Wire the collaborators: an in-memory order store, the webhook
    // notification gateway, and a signed-in session
    let config = StoreConfig::from_env();
    let order_store = Arc::new(InMemoryOrderStore::new());
    let notifier = Arc::new(WebhookNotificationGateway::new(&config));
    let identity = Arc::new(SessionIdentity::signed_in(
        UserProfile::new("user-demo-1".to_string())
            .with_display_name("Demo Customer".to_string())
            .with_email("demo@example.com".to_string()),
    ));

    let catalog = ProductCatalog::with_sample_products();
    let mut shopper = ShopperApi::new(order_store.clone(), notifier, identity, config);

    // Browse and fill the cart
    let paracetamol = catalog.product("P001").expect("sample product");
    let sanitizer = catalog.product("P005").expect("sample product");

    shopper.add_to_cart(paracetamol);
    shopper.add_to_cart(paracetamol);
    shopper.add_to_cart(sanitizer);
    println!(
        "Cart: {} items, subtotal ${:.2}",
        shopper.cart().item_count(),
        shopper.cart().subtotal()
    );

    // Apply a coupon
    match shopper.apply_coupon_code("SAVE10") {
        Ok(coupon) => println!("Applied coupon {}: -${:.2}", coupon.code, shopper.discount()),
        Err(e) => println!("Coupon not applied: {}", e),
    }
    println!("Order total with delivery: ${:.2}", shopper.order_total());

    // Pick a payment method and place the order
    let wallet = PaymentMethod::default_wallet();
    let cod = PaymentMethod::find_by_id(&wallet, "cod").expect("built-in method");

    let order_id = shopper.place_order(cod, "221B Baker Street").await?;
    println!("Order placed: {}", order_id);
    println!("Cart after checkout: {} items", shopper.cart().item_count());

    // The admin dashboard sees the new order and the restock report
    let admin = AdminApi::new(order_store, catalog);
    for order in admin.list_orders().await? {
        println!(
            "[admin] {} by {} - ${:.2} ({})",
            order.order_id, order.customer_name, order.total_amount, order.status
        );
    }
    for alert in admin.low_stock_alerts() {
        println!(
            "[owner] low stock: {} ({} of {})",
            alert.product_name, alert.current_stock, alert.low_stock_threshold
        );
    }

    Ok(())
}
