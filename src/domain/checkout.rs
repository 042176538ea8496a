//! Checkout request shapes and validation
//!
//! Resolution with defaults happens before validation, so defaulting and
//! validation are independently testable steps.

use crate::config::app_config::CustomerDefaults;
use crate::shared::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Inbound checkout request from the storefront
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequest {
    /// Transaction amount; must be strictly positive
    pub amount: f64,

    /// Customer fields; any absent field falls back to a configured default
    #[serde(default)]
    pub customer: CustomerInput,

    /// Ordered cart lines, possibly empty
    #[serde(default)]
    pub cart: Vec<CartItem>,

    /// UTM attribution fields
    #[serde(default)]
    pub utm: UtmParams,
}

/// Customer block as sent by the storefront
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub document: Option<String>,
    pub phone: Option<String>,
}

/// A single cart line
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartItem {
    pub name: Option<String>,
    pub unit_price: Option<f64>,
    pub quantity: Option<u32>,
}

impl CartItem {
    /// Quantity with the missing-value fallback applied
    pub fn quantity_or_default(&self) -> u32 {
        self.quantity.unwrap_or(1)
    }
}

/// UTM attribution fields, all optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UtmParams {
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub utm_term: Option<String>,
    pub utm_content: Option<String>,
}

/// Customer block with every field populated and digits cleaned
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCustomer {
    pub name: String,
    pub email: String,
    /// Digits-only document
    pub document: String,
    /// Digits-only phone
    pub phone: String,
}

/// Checkout request after default substitution
#[derive(Debug, Clone)]
pub struct ResolvedCheckout {
    pub amount: f64,
    pub customer: ResolvedCustomer,
    pub cart: Vec<CartItem>,
    pub utm: UtmParams,
}

/// Strip everything but ASCII digits
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

impl CheckoutRequest {
    /// Substitute configured defaults for absent customer fields and clean
    /// document/phone down to digits
    pub fn resolve(self, defaults: &CustomerDefaults) -> ResolvedCheckout {
        let customer = ResolvedCustomer {
            name: self.customer.name.unwrap_or_else(|| defaults.name.clone()),
            email: self
                .customer
                .email
                .unwrap_or_else(|| defaults.email.clone()),
            document: digits_only(
                &self
                    .customer
                    .document
                    .unwrap_or_else(|| defaults.document.clone()),
            ),
            phone: digits_only(
                &self.customer.phone.unwrap_or_else(|| defaults.phone.clone()),
            ),
        };

        ResolvedCheckout {
            amount: self.amount,
            customer,
            cart: self.cart,
            utm: self.utm,
        }
    }
}

impl ResolvedCheckout {
    /// Fail-fast validation, performed before any upstream call
    pub fn validate(&self) -> AppResult<()> {
        if self.customer.document.len() != 11 {
            return Err(AppError::Validation("CPF deve ter 11 dígitos".to_string()));
        }

        if self.amount <= 0.0 {
            return Err(AppError::Validation(
                "Valor deve ser maior que zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Sum of cart quantities, at least 1
    pub fn total_quantity(&self) -> u32 {
        self.cart
            .iter()
            .map(CartItem::quantity_or_default)
            .sum::<u32>()
            .max(1)
    }
}
