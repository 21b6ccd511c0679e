//! Store configuration

use std::time::Duration;

/// Default base URL for the notification webhook host
const DEFAULT_WEBHOOK_BASE_URL: &str = "http://localhost:5678";

/// Flat delivery fee charged on every order, in store currency
const DEFAULT_DELIVERY_FEE: f64 = 2.99;

/// Default timeout for outbound webhook requests (in seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for the storefront core
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the webhook host that receives order notifications
    pub webhook_base_url: String,
    /// Flat delivery fee added to every order total
    pub delivery_fee: f64,
    /// Timeout applied to each outbound webhook request
    pub request_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            webhook_base_url: DEFAULT_WEBHOOK_BASE_URL.to_string(),
            delivery_fee: DEFAULT_DELIVERY_FEE,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl StoreConfig {
    /// Builds a configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    ///
    /// Recognized variables: `MEDCART_WEBHOOK_URL`, `MEDCART_DELIVERY_FEE`,
    /// `MEDCART_REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("MEDCART_WEBHOOK_URL") {
            if !url.is_empty() {
                config.webhook_base_url = url;
            }
        }

        if let Ok(fee) = std::env::var("MEDCART_DELIVERY_FEE") {
            if let Ok(fee) = fee.parse::<f64>() {
                config.delivery_fee = fee;
            }
        }

        if let Ok(secs) = std::env::var("MEDCART_REQUEST_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse::<u64>() {
                config.request_timeout = Duration::from_secs(secs);
            }
        }

        config
    }

    /// Sets the webhook base URL
    pub fn with_webhook_base_url(mut self, url: String) -> Self {
        self.webhook_base_url = url;
        self
    }

    /// Sets the delivery fee
    pub fn with_delivery_fee(mut self, fee: f64) -> Self {
        self.delivery_fee = fee;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();

        assert_eq!(config.webhook_base_url, "http://localhost:5678");
        assert_eq!(config.delivery_fee, 2.99);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_overrides() {
        let config = StoreConfig::default()
            .with_webhook_base_url("https://hooks.example.com".to_string())
            .with_delivery_fee(0.0);

        assert_eq!(config.webhook_base_url, "https://hooks.example.com");
        assert_eq!(config.delivery_fee, 0.0);
    }
}
