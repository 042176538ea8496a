//! PIX gateway adapter
//!
//! HTTP communication with the external PIX payment gateway. The access token
//! travels as a query parameter, the way the vendor API expects it; error logs
//! carry the endpoint without the token.

use crate::config::AppConfig;
use crate::domain::gateway::{PixGateway, TransactionPayload, TransactionResult};
use crate::shared::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Adapter for the external PIX payment gateway
pub struct PixGatewayAdapter {
    config: Arc<AppConfig>,
    client: reqwest::Client,
}

impl PixGatewayAdapter {
    /// Create a new gateway adapter with the configured timeout
    pub fn new(config: Arc<AppConfig>) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.gateway.timeout_seconds))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn transactions_endpoint(&self) -> String {
        format!("{}transactions", self.config.gateway.base_url)
    }

    fn status_endpoint(&self, hash: &str) -> String {
        format!("{}transactions/{}", self.config.gateway.base_url, hash)
    }
}

#[async_trait]
impl PixGateway for PixGatewayAdapter {
    async fn create_transaction(
        &self,
        payload: &TransactionPayload,
    ) -> AppResult<TransactionResult> {
        let endpoint = self.transactions_endpoint();

        info!(amount = payload.amount, "Sending transaction to gateway");

        let response = self
            .client
            .post(&endpoint)
            .query(&[("api_token", self.config.gateway.api_token.as_str())])
            .header("Accept", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, url = %endpoint, "Gateway request failed");
                AppError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok();
            error!(
                url = %endpoint,
                status = status.as_u16(),
                body = body.as_deref(),
                "Gateway returned an error status"
            );
            return Err(AppError::Gateway {
                message: format!("HTTP error: {}", status),
                status: Some(status.as_u16()),
                body,
            });
        }

        response.json::<TransactionResult>().await.map_err(|e| {
            error!(error = %e, url = %endpoint, "Failed to parse gateway response");
            AppError::Gateway {
                message: format!("Failed to parse response: {}", e),
                status: Some(status.as_u16()),
                body: None,
            }
        })
    }

    async fn transaction_status(&self, hash: &str) -> AppResult<serde_json::Value> {
        let endpoint = self.status_endpoint(hash);

        let response = self
            .client
            .get(&endpoint)
            .query(&[("api_token", self.config.gateway.api_token.as_str())])
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, hash = %hash, "Status request failed");
                AppError::from(e)
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::GatewayNotFound);
        }

        if !status.is_success() {
            let body = response.text().await.ok();
            error!(
                hash = %hash,
                status_code = status.as_u16(),
                body = body.as_deref(),
                "Gateway status lookup returned an error"
            );
            return Err(AppError::Gateway {
                message: format!("HTTP error: {}", status),
                status: Some(status.as_u16()),
                body,
            });
        }

        response.json::<serde_json::Value>().await.map_err(|e| {
            error!(error = %e, hash = %hash, "Failed to parse status response");
            AppError::Gateway {
                message: format!("Failed to parse response: {}", e),
                status: Some(status.as_u16()),
                body: None,
            }
        })
    }
}
