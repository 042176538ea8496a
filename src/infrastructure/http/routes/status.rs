//! Status routes module

use crate::application::services::StatusService;
use crate::infrastructure::http::{
    handlers::handle_status_request, utils::with_status_service,
};
use std::sync::Arc;
use warp::Filter;

/// Status routes configuration
pub struct StatusRoutes;

impl StatusRoutes {
    /// Create the status lookup endpoint route
    pub fn create_status_route(
        status_service: Arc<StatusService>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path("verificar_status")
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::json())
            .and(with_status_service(status_service))
            .and_then(handle_status_request)
    }
}
