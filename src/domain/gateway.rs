//! Gateway wire shapes and the outbound port
//!
//! Vendor-specific request/response shapes for the PIX gateway, plus the
//! `PixGateway` trait the HTTP adapter implements.

use crate::shared::error::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Vendor transaction-creation payload
#[derive(Debug, Clone, Serialize)]
pub struct TransactionPayload {
    pub amount: f64,
    pub offer_hash: String,
    pub payment_method: String,
    pub customer: PayloadCustomer,
    pub cart: Vec<PayloadItem>,
    pub installments: u32,
    pub expire_in_days: u32,
    pub transaction_origin: String,
    pub tracking: Tracking,
}

/// Customer block sent to the vendor, address fields included
#[derive(Debug, Clone, Serialize)]
pub struct PayloadCustomer {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub document: String,
    pub street_name: String,
    pub number: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Cart line sent to the vendor
#[derive(Debug, Clone, Serialize)]
pub struct PayloadItem {
    pub product_hash: String,
    pub title: String,
    pub cover: Option<String>,
    pub price: f64,
    pub quantity: u32,
    pub operation_type: u32,
    pub tangible: bool,
    pub product_id: u64,
    pub offer_id: u64,
}

/// Tracking block mirroring the utm fields; absent values become empty strings
#[derive(Debug, Clone, Serialize)]
pub struct Tracking {
    pub src: String,
    pub utm_source: String,
    pub utm_medium: String,
    pub utm_campaign: String,
    pub utm_term: String,
    pub utm_content: String,
}

/// Vendor response to transaction creation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionResult {
    /// Transaction identifier; the vendor sends either a number or a string
    #[serde(default)]
    pub transaction: Option<Value>,

    /// Transaction hash, used for status lookups
    #[serde(default)]
    pub hash: Option<String>,

    #[serde(default)]
    pub pix: Option<PixDetails>,
}

/// PIX block of the vendor response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PixDetails {
    #[serde(default)]
    pub pix_qr_code: Option<String>,
}

impl TransactionResult {
    /// PIX QR payload string, when present and non-empty
    pub fn pix_qr_code(&self) -> Option<&str> {
        self.pix
            .as_ref()
            .and_then(|p| p.pix_qr_code.as_deref())
            .filter(|code| !code.is_empty())
    }

    /// Transaction hash, when present and non-empty
    pub fn transaction_hash(&self) -> Option<&str> {
        self.hash.as_deref().filter(|hash| !hash.is_empty())
    }

    /// A 2xx response still counts as a failure unless id, hash, and PIX
    /// payload are all present
    pub fn is_complete(&self) -> bool {
        let has_id = match &self.transaction {
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Null) | None => false,
            Some(_) => true,
        };

        has_id && self.transaction_hash().is_some() && self.pix_qr_code().is_some()
    }
}

/// Outbound port to the PIX payment gateway
#[async_trait]
pub trait PixGateway: Send + Sync {
    /// Create a transaction at the gateway
    async fn create_transaction(&self, payload: &TransactionPayload)
        -> AppResult<TransactionResult>;

    /// Fetch the raw status body for a transaction hash
    async fn transaction_status(&self, hash: &str) -> AppResult<Value>;
}
