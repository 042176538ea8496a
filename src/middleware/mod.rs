//! Middleware module

pub mod cors;
