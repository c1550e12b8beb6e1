// ==================== PAYMENTS ====================
// Checkout hospedado: cria a sessão e, no retorno, confirma o Premium

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::{
    config::AppConfig,
    database::Store,
    payment::{CheckoutRequest, PaymentGateway},
    utils::AppError,
};

pub const PREMIUM_PRODUCT_NAME: &str = "Sapiens.io Premium Membership";
pub const PREMIUM_PRICE_CENTS: i64 = 1200;
pub const PREMIUM_CURRENCY: &str = "usd";

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateCheckoutRequest {
    pub email: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct CheckoutResponse {
    pub url: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct PaymentSuccessRequest {
    pub session_id: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct PaymentSuccessResponse {
    pub success: bool,
}

/// Opens a hosted checkout for the premium membership and returns the URL
/// the client should redirect to.
pub async fn create_checkout_session(
    gateway: &dyn PaymentGateway,
    config: &AppConfig,
    request: &CreateCheckoutRequest,
) -> Result<CheckoutResponse, AppError> {
    let checkout = CheckoutRequest {
        customer_email: request.email.clone(),
        user_id: request.user_id.clone(),
        product_name: PREMIUM_PRODUCT_NAME.to_string(),
        currency: PREMIUM_CURRENCY.to_string(),
        unit_amount: PREMIUM_PRICE_CENTS,
        success_url: config.success_url(),
        cancel_url: config.cancel_url(),
    };

    let session = gateway.create_checkout_session(&checkout).await?;
    let url = session.url.ok_or_else(|| {
        AppError::PaymentError(format!("Checkout session {} has no URL", session.id))
    })?;

    log::info!("✅ Checkout session {} created for {}", session.id, request.email);
    Ok(CheckoutResponse { url })
}

/// Grants premium to the user tagged on the session.
///
/// Succeeds only when the flag actually flips: unknown session owners and
/// users who are already premium report `success: false` and are left as is.
pub async fn confirm_payment(
    store: &dyn Store,
    gateway: &dyn PaymentGateway,
    session_id: &str,
) -> Result<PaymentSuccessResponse, AppError> {
    let session = gateway.retrieve_checkout_session(session_id).await?;
    log::info!(
        "🔎 Session {} payment status: {}",
        session_id,
        session.payment_status.as_deref().unwrap_or("unknown")
    );

    let user_id = match session.user_id().and_then(|id| ObjectId::parse_str(id).ok()) {
        Some(id) => id,
        None => {
            log::warn!("⚠️ Session {} carries no valid userId", session_id);
            return Ok(PaymentSuccessResponse { success: false });
        }
    };

    let upgraded = store.mark_premium(&user_id).await?;
    if upgraded {
        log::info!("⭐ User {} upgraded to premium (session {})", user_id, session_id);
    } else {
        log::info!("ℹ️  User {} missing or already premium (session {})", user_id, session_id);
    }

    Ok(PaymentSuccessResponse { success: upgraded })
}
