//! Status lookup service
//!
//! Polls the gateway for a transaction's status and normalizes the vendor
//! vocabulary. Ordinary upstream issues degrade to a soft result instead of
//! failing: polling should not throw.

use crate::domain::gateway::PixGateway;
use crate::domain::status::{CanonicalStatus, StatusReport};
use crate::shared::error::AppError;
use std::sync::Arc;
use tracing::{error, info};

/// Hashes with this prefix short-circuit without calling upstream
pub const TEST_HASH_PREFIX: &str = "test_";

/// Status lookup service
pub struct StatusService {
    gateway: Arc<dyn PixGateway>,
}

impl StatusService {
    /// Create a new status service
    pub fn new(gateway: Arc<dyn PixGateway>) -> Self {
        Self { gateway }
    }

    /// Check the status of a transaction hash
    ///
    /// Never fails: an upstream 404 becomes `not_found`, any other upstream
    /// failure becomes `pending`.
    pub async fn check(&self, hash: &str) -> StatusReport {
        if hash.starts_with(TEST_HASH_PREFIX) {
            return StatusReport::test_mode();
        }

        match self.gateway.transaction_status(hash).await {
            Ok(body) => {
                // payment_status first, status as fallback
                let raw = body
                    .get("payment_status")
                    .and_then(|v| v.as_str())
                    .or_else(|| body.get("status").and_then(|v| v.as_str()))
                    .unwrap_or("pending");

                info!(hash = %hash, status = %raw, "Transaction status checked");

                let message = body
                    .get("message")
                    .and_then(|v| v.as_str())
                    .unwrap_or("Status verificado")
                    .to_string();

                StatusReport {
                    status: CanonicalStatus::from_vendor(raw),
                    message,
                    original_status: Some(raw.to_string()),
                }
            }
            Err(AppError::GatewayNotFound) => {
                info!(hash = %hash, "Transaction not known to the gateway yet");
                StatusReport::not_found()
            }
            Err(e) => {
                error!(hash = %hash, error = %e, "Failed to check transaction status");
                StatusReport::undetermined()
            }
        }
    }
}
