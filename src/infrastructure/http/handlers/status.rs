//! Status lookup handler module
//!
//! The only hard failure here is a missing hash; everything else answers
//! HTTP 200 with a soft status.

use crate::application::services::StatusService;
use crate::infrastructure::http::models::{StatusEnvelope, StatusQuery};
use crate::infrastructure::http::responses::ResponseFormatter;
use crate::shared::error::AppError;
use std::sync::Arc;
use warp::Reply;

/// Handle transaction status lookups
pub async fn handle_status_request(
    query: StatusQuery,
    service: Arc<StatusService>,
) -> Result<impl Reply, warp::reject::Rejection> {
    let hash = match query.hash.as_deref().filter(|h| !h.is_empty()) {
        Some(hash) => hash.to_string(),
        None => {
            let error = AppError::Validation("Hash da transação é obrigatório".to_string());
            return Ok(ResponseFormatter::from_app_error(&error));
        }
    };

    let report = service.check(&hash).await;
    Ok(ResponseFormatter::status(StatusEnvelope::from(report)))
}
