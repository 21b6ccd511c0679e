use serde::{Deserialize, Serialize};

/// Default low-stock threshold applied when a product does not set its own
const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;

/// Represents a product in the storefront catalog
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    /// Unique identifier for the product
    pub id: String,
    /// Display name of the product
    pub name: String,
    /// Unit price (non-negative)
    pub price: f64,
    /// URL of the product image
    pub image_url: String,
    /// Units currently available (non-negative)
    pub stock: u32,
    /// Stock level below which the product is flagged for restocking
    pub low_stock_threshold: u32,
}

impl Product {
    /// Creates a new Product with the default low-stock threshold
    pub fn new(id: String, name: String, price: f64, image_url: String, stock: u32) -> Self {
        Self {
            id,
            name,
            price,
            image_url,
            stock,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }

    /// Sets a per-product low-stock threshold
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    /// Whether at least one unit is available
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Whether the product is running low: some stock remains, but less than
    /// the threshold. Out-of-stock products are not "low", they are gone.
    pub fn is_low_stock(&self) -> bool {
        self.stock > 0 && self.stock < self.low_stock_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with_stock(stock: u32, threshold: u32) -> Product {
        Product::new(
            "P001".to_string(),
            "Paracetamol 500mg".to_string(),
            9.99,
            "https://picsum.photos/200".to_string(),
            stock,
        )
        .with_threshold(threshold)
    }

    #[test]
    fn test_low_stock_boundaries() {
        // Zero stock is out of stock, not low stock
        assert!(!product_with_stock(0, 20).is_low_stock());
        assert!(!product_with_stock(0, 20).in_stock());

        // Anything strictly between zero and the threshold is low
        assert!(product_with_stock(1, 20).is_low_stock());
        assert!(product_with_stock(19, 20).is_low_stock());

        // At or above the threshold is fine
        assert!(!product_with_stock(20, 20).is_low_stock());
        assert!(!product_with_stock(50, 20).is_low_stock());
    }

    #[test]
    fn test_default_threshold() {
        let product = Product::new(
            "P002".to_string(),
            "Vitamin C 1000mg".to_string(),
            14.99,
            "https://picsum.photos/201".to_string(),
            30,
        );

        assert_eq!(product.low_stock_threshold, 10);
    }
}
