use serde::{Deserialize, Serialize};

/// Represents a payment method the customer can select at checkout
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaymentMethod {
    /// Stable identifier, e.g. "cod"
    pub id: String,
    /// Display name, e.g. "Cash on Delivery"
    pub name: String,
    /// Short detail line shown under the name, e.g. a masked card number
    pub details: String,
}

impl PaymentMethod {
    /// Creates a new PaymentMethod
    pub fn new(id: String, name: String, details: String) -> Self {
        Self { id, name, details }
    }

    /// The store's built-in payment options, in display order. The first
    /// entry is the default selection.
    pub fn default_wallet() -> Vec<PaymentMethod> {
        vec![
            PaymentMethod::new(
                "mastercard".to_string(),
                "Mastercard".to_string(),
                "**** **** **** 1234".to_string(),
            ),
            PaymentMethod::new(
                "googlepay".to_string(),
                "Google Pay".to_string(),
                "user@gmail.com".to_string(),
            ),
            PaymentMethod::new(
                "paytm".to_string(),
                "Paytm".to_string(),
                "+1 234-567-8900".to_string(),
            ),
            PaymentMethod::new(
                "upi".to_string(),
                "UPI".to_string(),
                "user@bankname".to_string(),
            ),
            PaymentMethod::new(
                "cod".to_string(),
                "Cash on Delivery".to_string(),
                "Pay when you receive".to_string(),
            ),
        ]
    }

    /// Looks up a payment method by id within a list of methods
    pub fn find_by_id<'a>(methods: &'a [PaymentMethod], id: &str) -> Option<&'a PaymentMethod> {
        methods.iter().find(|method| method.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wallet() {
        let wallet = PaymentMethod::default_wallet();

        assert_eq!(wallet.len(), 5);
        assert_eq!(wallet[0].id, "mastercard");
        assert_eq!(wallet[4].name, "Cash on Delivery");
    }

    #[test]
    fn test_find_by_id() {
        let wallet = PaymentMethod::default_wallet();

        let cod = PaymentMethod::find_by_id(&wallet, "cod").unwrap();
        assert_eq!(cod.name, "Cash on Delivery");

        assert!(PaymentMethod::find_by_id(&wallet, "bitcoin").is_none());
    }
}
