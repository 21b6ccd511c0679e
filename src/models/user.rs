use serde::{Deserialize, Serialize};

/// Profile fields exposed by the identity provider for the signed-in user
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    /// Stable identifier of the user account
    pub user_id: String,
    /// Optional display name
    pub display_name: Option<String>,
    /// Optional email address
    pub email: Option<String>,
    /// Optional phone number
    pub phone: Option<String>,
}

impl UserProfile {
    /// Creates a new UserProfile with only the user id set
    pub fn new(user_id: String) -> Self {
        Self {
            user_id,
            display_name: None,
            email: None,
            phone: None,
        }
    }

    /// Sets the display name
    pub fn with_display_name(mut self, display_name: String) -> Self {
        self.display_name = Some(display_name);
        self
    }

    /// Sets the email address
    pub fn with_email(mut self, email: String) -> Self {
        self.email = Some(email);
        self
    }

    /// Sets the phone number
    pub fn with_phone(mut self, phone: String) -> Self {
        self.phone = Some(phone);
        self
    }

    /// Name to stamp onto an order; falls back to "Customer"
    pub fn customer_name(&self) -> String {
        self.display_name
            .clone()
            .unwrap_or_else(|| "Customer".to_string())
    }

    /// Email to stamp onto an order; empty string when unknown
    pub fn customer_email(&self) -> String {
        self.email.clone().unwrap_or_default()
    }

    /// Phone to stamp onto an order; empty string when unknown
    pub fn customer_phone(&self) -> String {
        self.phone.clone().unwrap_or_default()
    }
}
