//! Checkout routes module

use crate::application::services::PaymentService;
use crate::config::AppConfig;
use crate::infrastructure::http::{
    handlers::handle_checkout_request,
    utils::{with_config, with_payment_service},
};
use std::sync::Arc;
use warp::Filter;

/// Checkout routes configuration
pub struct CheckoutRoutes;

impl CheckoutRoutes {
    /// Create the payment initiation endpoint route
    pub fn create_checkout_route(
        config: AppConfig,
        payment_service: Arc<PaymentService>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path("geradorinvictus")
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::json())
            .and(with_payment_service(payment_service))
            .and(with_config(config))
            .and_then(handle_checkout_request)
    }
}
