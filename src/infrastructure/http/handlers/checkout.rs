//! Checkout handler module
//!
//! Payment initiation: validates the checkout request, drives the payment
//! service, and wraps the outcome in a success or failure envelope.

use crate::application::services::PaymentService;
use crate::config::AppConfig;
use crate::domain::checkout::CheckoutRequest;
use crate::infrastructure::http::responses::ResponseFormatter;
use std::sync::Arc;
use tracing::info;
use warp::Reply;

/// Handle payment initiation requests
pub async fn handle_checkout_request(
    request: CheckoutRequest,
    service: Arc<PaymentService>,
    config: AppConfig,
) -> Result<impl Reply, warp::reject::Rejection> {
    if config.security.enable_request_logging {
        info!(
            amount = request.amount,
            cart_items = request.cart.len(),
            "New payment request received"
        );
    }

    match service.create_payment(request).await {
        Ok(instruction) => {
            info!(hash = %instruction.hash, "Payment instruction sent to the frontend");
            Ok(ResponseFormatter::success(instruction))
        }
        Err(e) => Ok(ResponseFormatter::from_app_error(&e)),
    }
}
