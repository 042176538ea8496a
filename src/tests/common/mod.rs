//! Common test utilities
//!
//! A configurable in-memory gateway standing in for the real PIX gateway, so
//! services and routes can be exercised without network activity.

use crate::domain::gateway::{PixGateway, TransactionPayload, TransactionResult};
use crate::shared::error::{AppError, AppResult};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock gateway with canned responses and call counters
pub struct MockGateway {
    pub create_result: AppResult<TransactionResult>,
    pub status_result: AppResult<Value>,
    pub create_calls: Arc<AtomicUsize>,
    pub status_calls: Arc<AtomicUsize>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self {
            create_result: Ok(TransactionResult::default()),
            status_result: Ok(serde_json::json!({})),
            create_calls: Arc::new(AtomicUsize::new(0)),
            status_calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl MockGateway {
    /// Gateway answering transaction creation with the given JSON body
    pub fn with_create_body(body: Value) -> Self {
        Self {
            create_result: Ok(serde_json::from_value(body).unwrap()),
            ..Default::default()
        }
    }

    /// Gateway failing transaction creation with the given error
    pub fn with_create_error(error: AppError) -> Self {
        Self {
            create_result: Err(error),
            ..Default::default()
        }
    }

    /// Gateway answering status lookups with the given JSON body
    pub fn with_status_body(body: Value) -> Self {
        Self {
            status_result: Ok(body),
            ..Default::default()
        }
    }

    /// Gateway failing status lookups with the given error
    pub fn with_status_error(error: AppError) -> Self {
        Self {
            status_result: Err(error),
            ..Default::default()
        }
    }
}

#[async_trait]
impl PixGateway for MockGateway {
    async fn create_transaction(
        &self,
        _payload: &TransactionPayload,
    ) -> AppResult<TransactionResult> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.create_result.clone()
    }

    async fn transaction_status(&self, _hash: &str) -> AppResult<Value> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        self.status_result.clone()
    }
}
