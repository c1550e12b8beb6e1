use actix_web::{web, HttpResponse};

use crate::{
    config::AppConfig,
    database::Store,
    payment::PaymentGateway,
    services::payment_service::{
        self, CheckoutResponse, CreateCheckoutRequest, PaymentSuccessRequest,
        PaymentSuccessResponse,
    },
    utils::AppError,
};

#[utoipa::path(
    post,
    path = "/create-checkout-session",
    tag = "Payments",
    request_body = CreateCheckoutRequest,
    responses(
        (status = 200, description = "Hosted checkout URL", body = CheckoutResponse),
        (status = 500, description = "Payment processor error")
    )
)]
pub async fn create_checkout_session(
    gateway: web::Data<dyn PaymentGateway>,
    config: web::Data<AppConfig>,
    request: web::Json<CreateCheckoutRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("💳 POST /create-checkout-session - email: {}", request.email);

    match payment_service::create_checkout_session(gateway.get_ref(), &config, &request).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            log::error!("❌ Checkout session failed for {}: {}", request.email, e);
            Err(e)
        }
    }
}

#[utoipa::path(
    patch,
    path = "/payment-success",
    tag = "Payments",
    request_body = PaymentSuccessRequest,
    responses(
        (status = 200, description = "Whether the user was upgraded", body = PaymentSuccessResponse),
        (status = 500, description = "Payment processor error")
    )
)]
pub async fn payment_success(
    store: web::Data<dyn Store>,
    gateway: web::Data<dyn PaymentGateway>,
    request: web::Json<PaymentSuccessRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("💰 PATCH /payment-success - session: {}", request.session_id);

    match payment_service::confirm_payment(store.get_ref(), gateway.get_ref(), &request.session_id)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            log::error!("❌ Payment confirmation failed: {}", e);
            Err(e)
        }
    }
}
