//! Error handling module
//!
//! This module provides centralized error handling for the application.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input validation failure; the message is shown to the caller as-is
    #[error("{0}")]
    Validation(String),

    /// Upstream call failure (timeout, connection error, non-2xx)
    #[error("Gateway communication failure: {message}")]
    Gateway {
        message: String,
        status: Option<u16>,
        body: Option<String>,
    },

    /// Upstream answered 404 for a transaction lookup
    #[error("Transaction not found at gateway")]
    GatewayNotFound,

    /// Upstream answered 2xx but the response is missing required fields
    #[error("Resposta da API incompleta")]
    IncompleteGatewayResponse,

    #[error("JSON serialization error: {0}")]
    Json(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code for this error
    pub fn http_status_code(&self) -> warp::http::StatusCode {
        match self {
            AppError::Validation(_) => warp::http::StatusCode::BAD_REQUEST,
            AppError::GatewayNotFound => warp::http::StatusCode::NOT_FOUND,
            _ => warp::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Best-effort vendor detail for diagnostic purposes
    ///
    /// Never replaces the generic top-level error message; surfaced only in
    /// the `details` field of a failure envelope.
    pub fn vendor_detail(&self) -> Option<String> {
        match self {
            AppError::Gateway { message, body, .. } => {
                let from_body = body.as_deref().and_then(|b| {
                    serde_json::from_str::<serde_json::Value>(b)
                        .ok()?
                        .get("message")?
                        .as_str()
                        .map(str::to_string)
                });
                Some(from_body.unwrap_or_else(|| message.clone()))
            }
            AppError::IncompleteGatewayResponse => Some(self.to_string()),
            _ => None,
        }
    }
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

// Implement warp::reject::Reject for AppError
impl warp::reject::Reject for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Gateway {
            message: err.to_string(),
            status: err.status().map(|s| s.as_u16()),
            body: None,
        }
    }
}
