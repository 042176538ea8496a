//! Payment instruction returned to the caller
//!
//! The QR-code-ready shape the storefront renders: hash, a QR image URL with
//! the PIX payload URL-encoded into it, the raw payload, and a human-formatted
//! expiry timestamp.

use chrono::{Duration, Local};
use serde::Serialize;

/// QR-code-ready payment instruction
#[derive(Debug, Clone, Serialize)]
pub struct PaymentInstruction {
    pub hash: String,
    pub qr_code_url: String,
    pub pix_code: String,
    /// Local time, `dd/MM/yyyy HH:mm:ss`
    pub expire_at: String,
    pub amount: f64,
    pub status: String,
}

impl PaymentInstruction {
    /// Build an instruction for a freshly created transaction
    pub fn new(
        hash: &str,
        pix_code: &str,
        amount: f64,
        qr_service_url: &str,
        expire_minutes: i64,
    ) -> Self {
        let expire_at = (Local::now() + Duration::minutes(expire_minutes))
            .format("%d/%m/%Y %H:%M:%S")
            .to_string();

        Self {
            hash: hash.to_string(),
            qr_code_url: format!("{}?text={}", qr_service_url, urlencoding::encode(pix_code)),
            pix_code: pix_code.to_string(),
            expire_at,
            amount,
            status: "pending".to_string(),
        }
    }
}
