//! Infrastructure module
//!
//! This module contains the outbound gateway adapter and the HTTP surface.

pub mod adapters;
pub mod http;
