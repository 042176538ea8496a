//! HTTP responses module
//!
//! This module contains HTTP response formatting and the error-to-status
//! mapping. Gateway failures always surface the same generic top-level
//! message; vendor detail only ever lands in `details`.

use crate::infrastructure::http::models::{ApiError, ApiSuccess, StatusEnvelope};
use crate::shared::error::AppError;
use serde::Serialize;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};

/// Response formatter for HTTP responses
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Format a success envelope
    pub fn success<T: Serialize>(data: T) -> WithStatus<Json> {
        warp::reply::with_status(warp::reply::json(&ApiSuccess::new(data)), StatusCode::OK)
    }

    /// Format a status lookup envelope (always HTTP 200)
    pub fn status(envelope: StatusEnvelope) -> WithStatus<Json> {
        warp::reply::with_status(warp::reply::json(&envelope), StatusCode::OK)
    }

    /// Format an application error as a failure envelope
    pub fn from_app_error(error: &AppError) -> WithStatus<Json> {
        let body = match error {
            AppError::Validation(message) => ApiError::new(message.clone()),
            AppError::Gateway { .. } | AppError::IncompleteGatewayResponse => {
                ApiError::with_details(
                    "Falha na comunicação com a API de pagamentos",
                    error.vendor_detail(),
                )
            }
            _ => ApiError::new("Erro interno do servidor"),
        };

        warp::reply::with_status(warp::reply::json(&body), error.http_status_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warp::Reply;

    #[test]
    fn test_success_response() {
        let reply = ResponseFormatter::success(serde_json::json!({"hash": "abc"}));
        let response = reply.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_validation_error_is_400_with_specific_message() {
        let error = AppError::Validation("CPF deve ter 11 dígitos".to_string());
        let response = ResponseFormatter::from_app_error(&error).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_gateway_error_is_500() {
        let error = AppError::Gateway {
            message: "timeout".to_string(),
            status: None,
            body: None,
        };
        let response = ResponseFormatter::from_app_error(&error).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_incomplete_response_is_500() {
        let error = AppError::IncompleteGatewayResponse;
        let response = ResponseFormatter::from_app_error(&error).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_error_is_500() {
        let error = AppError::Internal("boom".to_string());
        let response = ResponseFormatter::from_app_error(&error).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
