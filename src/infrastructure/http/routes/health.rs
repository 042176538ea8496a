//! Health routes module

use crate::infrastructure::http::handlers::handle_health_request;
use warp::Filter;

/// Health routes configuration
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check endpoint route
    pub fn create_health_route(
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path("health")
            .and(warp::path::end())
            .and(warp::get())
            .and_then(handle_health_request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[tokio::test]
    async fn test_health_route_e2e() {
        let route = HealthRoutes::create_health_route();

        let res = warp::test::request()
            .method("GET")
            .path("/health")
            .reply(&route)
            .await;

        assert_eq!(res.status(), warp::http::StatusCode::OK);
        let body: Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body["status"], "OK");
        assert!(body.get("timestamp").is_some());
        assert!(body.get("service").is_some());
        assert!(body.get("version").is_some());
    }
}
