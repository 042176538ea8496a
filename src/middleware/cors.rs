//! CORS middleware
//!
//! The relay fronts a browser storefront directly, so CORS headers are served
//! by the application itself, built from the security configuration.

use crate::config::AppConfig;

/// CORS middleware built from the security configuration
pub struct CorsMiddleware;

impl CorsMiddleware {
    /// Build the warp CORS wrapper from the configured origins, methods, and headers
    pub fn build(config: &AppConfig) -> warp::cors::Cors {
        let mut cors = warp::cors()
            .allow_methods(config.security.cors_methods.iter().map(String::as_str))
            .allow_headers(config.security.cors_headers.iter().map(String::as_str));

        if config.cors_allow_any_origin() {
            cors = cors.allow_any_origin();
        } else {
            cors = cors.allow_origins(config.security.cors_origins.iter().map(String::as_str));
        }

        cors.build()
    }
}
