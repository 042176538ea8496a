//! Payment initiation service
//!
//! Resolves and validates the checkout request, builds the vendor transaction
//! payload, calls the gateway, and reshapes the response into a QR-code-ready
//! payment instruction.

use crate::config::AppConfig;
use crate::domain::checkout::{CheckoutRequest, ResolvedCheckout};
use crate::domain::gateway::{
    PayloadCustomer, PayloadItem, PixGateway, Tracking, TransactionPayload,
};
use crate::domain::payment::PaymentInstruction;
use crate::shared::error::{AppError, AppResult};
use std::sync::Arc;
use tracing::{error, info};

/// Payment initiation service
pub struct PaymentService {
    config: Arc<AppConfig>,
    gateway: Arc<dyn PixGateway>,
}

impl PaymentService {
    /// Create a new payment service
    pub fn new(config: Arc<AppConfig>, gateway: Arc<dyn PixGateway>) -> Self {
        Self { config, gateway }
    }

    /// Create a PIX transaction at the gateway and return the payment instruction
    pub async fn create_payment(
        &self,
        request: CheckoutRequest,
    ) -> AppResult<PaymentInstruction> {
        let resolved = request.resolve(&self.config.checkout.customer_defaults);

        if let Err(e) = resolved.validate() {
            error!(
                amount = resolved.amount,
                document_len = resolved.customer.document.len(),
                error = %e,
                "Checkout request failed validation"
            );
            return Err(e);
        }

        info!(
            email = %resolved.customer.email,
            amount = resolved.amount,
            "New transaction started"
        );

        let payload = self.build_payload(&resolved);
        let result = self.gateway.create_transaction(&payload).await?;

        if !result.is_complete() {
            error!(
                has_hash = result.transaction_hash().is_some(),
                has_pix = result.pix_qr_code().is_some(),
                "Gateway response missing required fields"
            );
            return Err(AppError::IncompleteGatewayResponse);
        }

        // is_complete() guarantees both fields
        let hash = result
            .transaction_hash()
            .ok_or(AppError::IncompleteGatewayResponse)?;
        let pix_code = result
            .pix_qr_code()
            .ok_or(AppError::IncompleteGatewayResponse)?;

        info!(hash = %hash, "Transaction created successfully");

        Ok(PaymentInstruction::new(
            hash,
            pix_code,
            resolved.amount,
            &self.config.gateway.qr_service_url,
            self.config.checkout.pix_expire_minutes,
        ))
    }

    /// Build the vendor transaction payload from a resolved checkout
    pub fn build_payload(&self, resolved: &ResolvedCheckout) -> TransactionPayload {
        let checkout = &self.config.checkout;
        let product = &checkout.product;
        let address = &checkout.address;

        let cart = if resolved.cart.is_empty() {
            // An empty cart still produces one line priced at the full amount
            vec![PayloadItem {
                product_hash: product.product_hash.clone(),
                title: product.synthetic_item_title.clone(),
                cover: None,
                price: resolved.amount,
                quantity: 1,
                operation_type: 1,
                tangible: false,
                product_id: product.product_id,
                offer_id: product.offer_id,
            }]
        } else {
            let fallback_price = (resolved.amount / resolved.total_quantity() as f64).round();
            resolved
                .cart
                .iter()
                .map(|item| PayloadItem {
                    product_hash: product.product_hash.clone(),
                    title: item
                        .name
                        .clone()
                        .unwrap_or_else(|| product.item_title_fallback.clone()),
                    cover: None,
                    price: item.unit_price.unwrap_or(fallback_price),
                    quantity: item.quantity_or_default(),
                    operation_type: 1,
                    tangible: false,
                    product_id: product.product_id,
                    offer_id: product.offer_id,
                })
                .collect()
        };

        let utm = &resolved.utm;
        TransactionPayload {
            amount: resolved.amount,
            offer_hash: product.offer_hash.clone(),
            payment_method: "pix".to_string(),
            customer: PayloadCustomer {
                name: resolved.customer.name.clone(),
                email: resolved.customer.email.clone(),
                phone_number: resolved.customer.phone.clone(),
                document: resolved.customer.document.clone(),
                street_name: address.street_name.clone(),
                number: address.number.clone(),
                complement: address.complement.clone(),
                neighborhood: address.neighborhood.clone(),
                city: address.city.clone(),
                state: address.state.clone(),
                zip_code: address.zip_code.clone(),
            },
            cart,
            installments: checkout.installments,
            expire_in_days: checkout.expire_in_days,
            transaction_origin: checkout.transaction_origin.clone(),
            tracking: Tracking {
                src: String::new(),
                utm_source: utm.utm_source.clone().unwrap_or_default(),
                utm_medium: utm.utm_medium.clone().unwrap_or_default(),
                utm_campaign: utm.utm_campaign.clone().unwrap_or_default(),
                utm_term: utm.utm_term.clone().unwrap_or_default(),
                utm_content: utm.utm_content.clone().unwrap_or_default(),
            },
        }
    }
}
