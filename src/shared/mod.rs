//! Shared utilities module
//!
//! This module contains shared utilities used across the application.

pub mod error;
pub mod logging;
