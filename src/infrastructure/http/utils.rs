//! HTTP utilities - route injection helpers

use crate::application::services::{PaymentService, StatusService};
use crate::config::AppConfig;
use std::sync::Arc;
use warp::Filter;

/// Helper function to inject configuration into route
pub fn with_config(
    config: AppConfig,
) -> impl Filter<Extract = (AppConfig,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || config.clone())
}

/// Helper function to inject the payment service into route
pub fn with_payment_service(
    service: Arc<PaymentService>,
) -> impl Filter<Extract = (Arc<PaymentService>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || service.clone())
}

/// Helper function to inject the status service into route
pub fn with_status_service(
    service: Arc<StatusService>,
) -> impl Filter<Extract = (Arc<StatusService>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || service.clone())
}
