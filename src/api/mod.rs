//! High-level storefront and admin APIs

pub mod admin;
pub mod shopper;

pub use admin::{AdminApi, LowStockAlert};
pub use shopper::ShopperApi;
