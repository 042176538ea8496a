//! Test support and integration tests

pub mod common;

mod integration;
