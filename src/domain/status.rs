//! Canonical status mapping
//!
//! The vendor's status vocabulary is normalized into a small canonical set
//! exposed to the caller: paid, pending, not_found, or passthrough of an
//! unrecognized vendor status.

use serde::{Serialize, Serializer};

/// Vendor statuses that count as a completed payment, case-insensitively
const PAID_STATUSES: [&str; 4] = ["paid", "approved", "completed", "success"];

/// Canonical payment status
#[derive(Debug, Clone, PartialEq)]
pub enum CanonicalStatus {
    Paid,
    Pending,
    NotFound,
    /// Unrecognized vendor status, passed through unchanged
    Other(String),
}

impl CanonicalStatus {
    /// Map a vendor status string to the canonical vocabulary
    pub fn from_vendor(raw: &str) -> Self {
        if PAID_STATUSES
            .iter()
            .any(|paid| raw.eq_ignore_ascii_case(paid))
        {
            CanonicalStatus::Paid
        } else if raw.eq_ignore_ascii_case("pending") {
            CanonicalStatus::Pending
        } else {
            CanonicalStatus::Other(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CanonicalStatus::Paid => "paid",
            CanonicalStatus::Pending => "pending",
            CanonicalStatus::NotFound => "not_found",
            CanonicalStatus::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for CanonicalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for CanonicalStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Result of a status lookup
#[derive(Debug, Clone)]
pub struct StatusReport {
    pub status: CanonicalStatus,
    pub message: String,
    /// Vendor status as read from the response, before normalization
    pub original_status: Option<String>,
}

impl StatusReport {
    /// Canned report for test-marker hashes; no upstream call involved
    pub fn test_mode() -> Self {
        Self {
            status: CanonicalStatus::Pending,
            message: "Pagamento pendente (modo teste)".to_string(),
            original_status: None,
        }
    }

    /// Report for a transaction the vendor does not know about
    pub fn not_found() -> Self {
        Self {
            status: CanonicalStatus::NotFound,
            message: "Transação não encontrada na API".to_string(),
            original_status: None,
        }
    }

    /// Degraded report when the status could not be determined right now
    pub fn undetermined() -> Self {
        Self {
            status: CanonicalStatus::Pending,
            message: "Não foi possível verificar o status no momento".to_string(),
            original_status: None,
        }
    }
}
