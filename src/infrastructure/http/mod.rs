//! HTTP infrastructure module
//!
//! This module contains the inbound HTTP surface: models, handlers, routes,
//! response formatting, and the server itself.

pub mod handlers;
pub mod models;
pub mod responses;
pub mod routes;
pub mod server;
pub mod utils;
