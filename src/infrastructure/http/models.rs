//! HTTP models module
//!
//! Inbound and outbound JSON envelopes for the relay's endpoints.

use crate::domain::status::{CanonicalStatus, StatusReport};
use serde::{Deserialize, Serialize};

/// Success envelope wrapping a payload
#[derive(Debug, Clone, Serialize)]
pub struct ApiSuccess<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Structured failure envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details,
        }
    }
}

/// Status lookup request body
#[derive(Debug, Clone, Deserialize)]
pub struct StatusQuery {
    #[serde(default)]
    pub hash: Option<String>,
}

/// Status lookup response
///
/// `success` is always true here: it means the status check was performed,
/// not that the payment succeeded. Preserved for backward compatibility with
/// the storefront client.
#[derive(Debug, Clone, Serialize)]
pub struct StatusEnvelope {
    pub success: bool,
    pub status: CanonicalStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_status: Option<String>,
}

impl From<StatusReport> for StatusEnvelope {
    fn from(report: StatusReport) -> Self {
        Self {
            success: true,
            status: report.status,
            message: report.message,
            original_status: report.original_status,
        }
    }
}

/// Health check response body
#[derive(Debug, Clone, Serialize)]
pub struct HealthBody {
    pub status: String,
    pub timestamp: String,
    pub service: String,
    pub version: String,
}

impl HealthBody {
    pub fn new() -> Self {
        Self {
            status: "OK".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for HealthBody {
    fn default() -> Self {
        Self::new()
    }
}
