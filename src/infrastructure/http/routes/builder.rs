//! Route builder module
//!
//! This module contains the main route builder that orchestrates the creation
//! of all application routes.

use crate::application::services::{PaymentService, StatusService};
use crate::config::AppConfig;
use crate::infrastructure::http::routes::{CheckoutRoutes, HealthRoutes, StatusRoutes};
use std::sync::Arc;
use warp::Filter;

/// Route builder that orchestrates the creation of all application routes
pub struct RouteBuilder;

impl RouteBuilder {
    /// Build all application routes
    pub fn build_routes(
        config: AppConfig,
        payment_service: Arc<PaymentService>,
        status_service: Arc<StatusService>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let checkout_route = CheckoutRoutes::create_checkout_route(config, payment_service);
        let status_route = StatusRoutes::create_status_route(status_service);
        let health_route = HealthRoutes::create_health_route();

        checkout_route.or(status_route).or(health_route)
    }
}
