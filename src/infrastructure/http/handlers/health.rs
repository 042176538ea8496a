//! Health check handler module

use crate::infrastructure::http::models::HealthBody;
use warp::Reply;

/// Handle health check requests
pub async fn handle_health_request() -> Result<impl Reply, warp::reject::Rejection> {
    Ok(warp::reply::json(&HealthBody::new()))
}
