//! Domain module
//!
//! This module contains the request/response shapes and pure business rules:
//! checkout resolution and validation, vendor wire shapes, canonical status
//! mapping, and payment instruction construction.

pub mod checkout;
pub mod gateway;
pub mod payment;
pub mod status;
