//! Infrastructure adapters module

pub mod pix_gateway;

pub use pix_gateway::PixGatewayAdapter;
