//! Application services module

pub mod payment_service;
pub mod status_service;

pub use payment_service::PaymentService;
pub use status_service::StatusService;
