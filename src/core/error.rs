//! Custom error types for the storefront core

use thiserror::Error;

/// Main error type for the storefront core
#[derive(Error, Debug)]
pub enum Error {
    /// Entered coupon code does not match any active coupon
    #[error("Invalid coupon code")]
    InvalidCouponCode,

    /// Cart subtotal is below the coupon's minimum order amount
    #[error("Minimum order amount is ${0:.2}")]
    MinimumNotMet(f64),

    /// No signed-in user identity is available
    #[error("User not authenticated")]
    Unauthenticated,

    /// Order submission attempted with an empty cart
    #[error("Cart is empty")]
    EmptyCart,

    /// Writing to or reading from the order store failed
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// A notification gateway call failed
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Serialization or deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid data or parameter
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}
