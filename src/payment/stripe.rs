use async_trait::async_trait;
use serde::Deserialize;

use super::{CheckoutRequest, CheckoutSession, PaymentGateway, USER_ID_METADATA};
use crate::utils::AppError;

const STRIPE_API_BASE: &str = "https://api.stripe.com";

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
}

/// Stripe Checkout client over the REST API
pub struct StripeClient {
    secret_key: String,
    api_base_url: String,
    http_client: reqwest::Client,
}

impl StripeClient {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            api_base_url: STRIPE_API_BASE.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    fn checkout_params(request: &CheckoutRequest) -> Vec<(String, String)> {
        vec![
            ("payment_method_types[0]".into(), "card".into()),
            ("mode".into(), "payment".into()),
            (
                "line_items[0][price_data][currency]".into(),
                request.currency.clone(),
            ),
            (
                "line_items[0][price_data][product_data][name]".into(),
                request.product_name.clone(),
            ),
            (
                "line_items[0][price_data][unit_amount]".into(),
                request.unit_amount.to_string(),
            ),
            ("line_items[0][quantity]".into(), "1".into()),
            ("customer_email".into(), request.customer_email.clone()),
            ("success_url".into(), request.success_url.clone()),
            ("cancel_url".into(), request.cancel_url.clone()),
            (
                format!("metadata[{}]", USER_ID_METADATA),
                request.user_id.clone(),
            ),
        ]
    }

    async fn read_session(response: reqwest::Response) -> Result<CheckoutSession, AppError> {
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            // Surface Stripe's own message when the body has one
            let message = serde_json::from_str::<StripeErrorBody>(&text)
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or_else(|| format!("Stripe API error ({}): {}", status, text));
            return Err(AppError::PaymentError(message));
        }

        response
            .json::<CheckoutSession>()
            .await
            .map_err(|e| AppError::PaymentError(format!("Failed to parse Stripe response: {}", e)))
    }
}

#[async_trait]
impl PaymentGateway for StripeClient {
    async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, AppError> {
        let url = format!("{}/v1/checkout/sessions", self.api_base_url);
        log::info!("💳 Creating Stripe checkout session for {}", request.customer_email);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.secret_key, Option::<&str>::None)
            .form(&Self::checkout_params(request))
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| AppError::PaymentError(format!("Failed to reach Stripe: {}", e)))?;

        Self::read_session(response).await
    }

    async fn retrieve_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<CheckoutSession, AppError> {
        let url = format!(
            "{}/v1/checkout/sessions/{}",
            self.api_base_url,
            urlencoding::encode(session_id)
        );
        log::info!("🔎 Retrieving Stripe checkout session {}", session_id);

        let response = self
            .http_client
            .get(&url)
            .basic_auth(&self.secret_key, Option::<&str>::None)
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| AppError::PaymentError(format!("Failed to reach Stripe: {}", e)))?;

        Self::read_session(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CheckoutRequest {
        CheckoutRequest {
            customer_email: "ada@example.com".into(),
            user_id: "65f0c0ffee".into(),
            product_name: "Sapiens.io Premium Membership".into(),
            currency: "usd".into(),
            unit_amount: 1200,
            success_url: "https://sapiens.io/payment-success?session_id={CHECKOUT_SESSION_ID}"
                .into(),
            cancel_url: "https://sapiens.io/payment-cancel".into(),
        }
    }

    fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_checkout_params_describe_single_item_payment() {
        let params = StripeClient::checkout_params(&request());
        assert_eq!(param(&params, "mode"), Some("payment"));
        assert_eq!(param(&params, "payment_method_types[0]"), Some("card"));
        assert_eq!(param(&params, "line_items[0][price_data][unit_amount]"), Some("1200"));
        assert_eq!(param(&params, "line_items[0][quantity]"), Some("1"));
        assert_eq!(param(&params, "metadata[userId]"), Some("65f0c0ffee"));
        assert_eq!(param(&params, "customer_email"), Some("ada@example.com"));
    }

    #[test]
    fn test_session_metadata_is_parsed() {
        let session: CheckoutSession = serde_json::from_value(serde_json::json!({
            "id": "cs_test_123",
            "object": "checkout.session",
            "url": "https://checkout.stripe.com/c/pay/cs_test_123",
            "payment_status": "paid",
            "metadata": { "userId": "65f0c0ffee" }
        }))
        .unwrap();
        assert_eq!(session.user_id(), Some("65f0c0ffee"));
        assert_eq!(session.payment_status.as_deref(), Some("paid"));
    }

    #[tokio::test]
    #[ignore] // Requires STRIPE_SECRET_KEY and network access
    async fn test_create_checkout_session() {
        dotenv::dotenv().ok();
        let key = std::env::var("STRIPE_SECRET_KEY").unwrap();
        let session = StripeClient::new(key)
            .create_checkout_session(&request())
            .await;
        assert!(session.is_ok());
    }
}
