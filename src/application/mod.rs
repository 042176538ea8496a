//! Application module
//!
//! This module contains the services orchestrating domain rules over the
//! gateway port.

pub mod services;
