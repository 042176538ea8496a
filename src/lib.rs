//! PIX Relay Server - HTTP relay between a storefront checkout and a PIX payment gateway
//!
//! This library accepts checkout requests from the storefront frontend, forwards a
//! reshaped transaction payload to the payment gateway, and exposes a status-polling
//! endpoint that proxies the gateway's transaction-status lookup.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod middleware;
pub mod shared;

#[cfg(test)]
pub mod tests;

pub use config::AppConfig;
pub use infrastructure::http::server::HttpServer;
pub use shared::error::{AppError, AppResult};

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
