//! Hosted checkout integration.
//!
//! The service only ever creates a checkout session and later reads it back
//! to learn which user paid; everything else happens on the processor's page.

pub mod stripe;

#[cfg(test)]
pub mod mock;

pub use stripe::StripeClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::utils::AppError;

/// Metadata key carrying the internal user id on a session
pub const USER_ID_METADATA: &str = "userId";

/// One-item purchase sent to the processor
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    pub customer_email: String,
    pub user_id: String,
    pub product_name: String,
    pub currency: String,
    /// Smallest currency unit (cents)
    pub unit_amount: i64,
    pub success_url: String,
    pub cancel_url: String,
}

/// Checkout session as returned by the processor
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSession {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl CheckoutSession {
    pub fn user_id(&self) -> Option<&str> {
        self.metadata.get(USER_ID_METADATA).map(String::as_str)
    }
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, AppError>;

    async fn retrieve_checkout_session(&self, session_id: &str)
        -> Result<CheckoutSession, AppError>;
}
