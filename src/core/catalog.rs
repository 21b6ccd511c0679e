//! Product catalog with stock levels and restock thresholds

use crate::models::Product;

/// In-memory product catalog.
///
/// The catalog is a read-only snapshot from the cart's point of view; the
/// only mutation it supports is the admin-side threshold adjustment.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Creates a catalog over the given products
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The pharmacy's built-in sample inventory
    pub fn with_sample_products() -> Self {
        let entry = |id: &str, name: &str, price: f64, image: &str, stock: u32, threshold: u32| {
            Product::new(
                id.to_string(),
                name.to_string(),
                price,
                image.to_string(),
                stock,
            )
            .with_threshold(threshold)
        };

        Self::new(vec![
            entry("P001", "Paracetamol 500mg", 9.99, "https://picsum.photos/200", 50, 20),
            entry("P002", "Vitamin C 1000mg", 14.99, "https://picsum.photos/201", 30, 15),
            entry("P003", "First Aid Kit Basic", 24.99, "https://picsum.photos/202", 20, 5),
            entry("P004", "Digital Thermometer", 19.99, "https://picsum.photos/203", 15, 3),
            entry("P005", "Hand Sanitizer 500ml", 4.99, "https://picsum.photos/204", 100, 25),
            entry("P006", "Face Masks (50 Pack)", 12.99, "https://picsum.photos/205", 0, 30),
            entry("P007", "Multivitamin Complex", 29.99, "https://picsum.photos/206", 40, 10),
            entry("P008", "Bandages Pack", 7.99, "https://picsum.photos/207", 150, 20),
            entry("P009", "Pain Relief Gel", 11.99, "https://picsum.photos/208", 0, 15),
            entry("P010", "Cough Syrup 200ml", 8.99, "https://picsum.photos/209", 5, 8),
            entry("P011", "Aspirin 325mg", 6.99, "https://picsum.photos/210", 25, 12),
            entry("P012", "Blood Pressure Monitor", 89.99, "https://picsum.photos/211", 8, 2),
            entry("P013", "Glucose Test Strips", 34.99, "https://picsum.photos/212", 0, 5),
        ])
    }

    /// All products, in catalog order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by its id
    pub fn product(&self, product_id: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|product| product.id == product_id)
    }

    /// Adjusts a product's low-stock threshold. Returns false when no
    /// product with the given id exists.
    pub fn update_threshold(&mut self, product_id: &str, new_threshold: u32) -> bool {
        match self
            .products
            .iter_mut()
            .find(|product| product.id == product_id)
        {
            Some(product) => {
                product.low_stock_threshold = new_threshold;
                true
            }
            None => false,
        }
    }

    /// Products that are running low: some stock left, but below threshold
    pub fn low_stock(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.is_low_stock())
            .collect()
    }

    /// Products with at least one unit available
    pub fn in_stock(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.in_stock())
            .collect()
    }

    /// Products that are sold out
    pub fn out_of_stock(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| !product.in_stock())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_lookup() {
        let catalog = ProductCatalog::with_sample_products();

        let paracetamol = catalog.product("P001").unwrap();
        assert_eq!(paracetamol.name, "Paracetamol 500mg");
        assert_eq!(paracetamol.price, 9.99);

        assert!(catalog.product("P999").is_none());
    }

    #[test]
    fn test_low_stock_excludes_sold_out() {
        let catalog = ProductCatalog::with_sample_products();
        let low = catalog.low_stock();

        // P006/P009/P013 have zero stock and must not appear even though
        // their stock is below threshold
        assert!(low.iter().all(|product| product.stock > 0));
        assert!(low
            .iter()
            .all(|product| product.stock < product.low_stock_threshold));

        // P010 (5 of 8) is the known low runner in the sample data
        assert!(low.iter().any(|product| product.id == "P010"));
    }

    #[test]
    fn test_stock_partitions_cover_catalog() {
        let catalog = ProductCatalog::with_sample_products();

        let available = catalog.in_stock().len();
        let sold_out = catalog.out_of_stock().len();
        assert_eq!(available + sold_out, catalog.products().len());
        assert_eq!(sold_out, 3);
    }

    #[test]
    fn test_update_threshold() {
        let mut catalog = ProductCatalog::with_sample_products();

        // P011 has 25 in stock with threshold 12; raising the threshold
        // above the stock level flags it
        assert!(!catalog.product("P011").unwrap().is_low_stock());
        assert!(catalog.update_threshold("P011", 30));
        assert!(catalog.product("P011").unwrap().is_low_stock());

        assert!(!catalog.update_threshold("P999", 10));
    }
}
