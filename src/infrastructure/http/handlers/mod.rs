//! HTTP handlers module

pub mod checkout;
pub mod health;
pub mod status;

pub use checkout::handle_checkout_request;
pub use health::handle_health_request;
pub use status::handle_status_request;
