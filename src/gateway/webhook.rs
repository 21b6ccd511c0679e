//! Webhook-backed notification gateway
//!
//! Posts order payloads to the automation host's webhook endpoints. The
//! payload shape (`{"body": [order]}`) and the three paths are what the
//! downstream workflows expect.

use super::NotificationGateway;
use crate::config::StoreConfig;
use crate::core::error::Error;
use crate::models::Order;
use crate::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

const CUSTOMER_NOTIFICATION_PATH: &str = "webhook-test/customer-notification";
const ORDER_PROCESSING_PATH: &str = "webhook-test/order-processing";
const INVENTORY_UPDATE_PATH: &str = "webhook-test/inventory-update";

/// Notification gateway delivering orders over HTTP webhooks
#[derive(Clone)]
pub struct WebhookNotificationGateway {
    client: Client,
    base_url: String,
}

impl WebhookNotificationGateway {
    /// Creates a gateway from the store configuration.
    ///
    /// Falls back to a default client if one cannot be built with the
    /// configured timeout.
    pub fn new(config: &StoreConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: config.webhook_base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn post_order(&self, path: &str, order: &Order) -> Result<()> {
        let url = format!("{}/{}", self.base_url, path);
        let payload = json!({ "body": [order] });

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::Gateway(format!("Failed to reach {}: {}", path, e)))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Error::Gateway(format!(
                "Webhook {} returned status {}",
                path,
                response.status()
            )))
        }
    }
}

#[async_trait]
impl NotificationGateway for WebhookNotificationGateway {
    async fn notify_customer(&self, order: &Order) -> Result<()> {
        self.post_order(CUSTOMER_NOTIFICATION_PATH, order).await
    }

    async fn trigger_processing(&self, order: &Order) -> Result<()> {
        self.post_order(ORDER_PROCESSING_PATH, order).await
    }

    async fn trigger_inventory_update(&self, order: &Order) -> Result<()> {
        self.post_order(INVENTORY_UPDATE_PATH, order).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderLine;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_order() -> Order {
        Order::new(
            "ORDER_1A2B3C4D".to_string(),
            "user-123".to_string(),
            vec![OrderLine::new(
                "P001".to_string(),
                "Paracetamol 500mg".to_string(),
                2,
                9.99,
            )],
            22.97,
            "Cash on Delivery".to_string(),
            1722945600,
        )
    }

    fn gateway_for(server: &MockServer) -> WebhookNotificationGateway {
        let config = StoreConfig::default().with_webhook_base_url(server.uri());
        WebhookNotificationGateway::new(&config)
    }

    #[tokio::test]
    async fn test_customer_notification_posts_wrapped_order() {
        let _ = env_logger::try_init();
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/webhook-test/customer-notification"))
            .and(body_partial_json(json!({
                "body": [{ "orderId": "ORDER_1A2B3C4D" }]
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        gateway.notify_customer(&sample_order()).await.unwrap();
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/webhook-test/order-processing"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let result = gateway.trigger_processing(&sample_order()).await;

        assert!(matches!(result, Err(Error::Gateway(_))));
    }

    #[tokio::test]
    async fn test_each_call_has_its_own_path() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/webhook-test/inventory-update"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        gateway
            .trigger_inventory_update(&sample_order())
            .await
            .unwrap();
    }
}
