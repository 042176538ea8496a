//! Application configuration structures
//!
//! This module contains the main configuration structures for the application.
//! Defaults mirror the original deployment constants; the API token is a
//! placeholder that real deployments must override via the `Conf` file or
//! `PIX_RELAY__GATEWAY__API_TOKEN`.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use validator::Validate;

/// Payment gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GatewayConfig {
    /// Gateway API base URL (trailing slash included)
    #[validate(url)]
    pub base_url: String,

    /// Static API access token, carried as a query parameter
    #[validate(length(min = 1))]
    pub api_token: String,

    /// Outbound call timeout in seconds
    #[validate(range(min = 1, max = 300))]
    pub timeout_seconds: u64,

    /// QR-image rendering service base URL
    #[validate(url)]
    pub qr_service_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.invictuspay.com.br/api/public/v1/".to_string(),
            api_token: "change-me".to_string(),
            timeout_seconds: 10,
            qr_service_url: "https://quickchart.io/qr".to_string(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    /// Server address to bind to
    pub bind_address: IpAddr,

    /// Server port
    #[validate(range(min = 1, max = 65535))]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".parse().unwrap(),
            port: 3001,
        }
    }
}

/// Security configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SecurityConfig {
    /// Allowed CORS origins ("*" allows any)
    pub cors_origins: Vec<String>,

    /// Allowed CORS methods
    pub cors_methods: Vec<String>,

    /// Allowed CORS headers
    pub cors_headers: Vec<String>,

    /// Enable request logging
    pub enable_request_logging: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            cors_origins: vec!["*".to_string()],
            cors_methods: vec!["GET".to_string(), "POST".to_string(), "OPTIONS".to_string()],
            cors_headers: vec!["Content-Type".to_string(), "Accept".to_string()],
            enable_request_logging: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    #[validate(length(min = 1))]
    pub level: String,

    /// Append-only log file path; `None` disables the file sink
    pub file_path: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: Some("error_log.txt".to_string()),
        }
    }
}

/// Fallback values for absent customer fields
///
/// Absent customer data must not block transaction creation, so each field
/// has a fixed substitute.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CustomerDefaults {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    /// Default CPF, 11 digits
    #[validate(length(equal = 11))]
    pub document: String,
    #[validate(length(min = 1))]
    pub phone: String,
}

impl Default for CustomerDefaults {
    fn default() -> Self {
        Self {
            name: "Cliente Manu Gourmet".to_string(),
            email: "cliente@manugourmet.com".to_string(),
            document: "23167861894".to_string(),
            phone: "11940028922".to_string(),
        }
    }
}

/// Fixed product and offer identifiers attached to every cart line
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProductConfig {
    #[validate(length(min = 1))]
    pub offer_hash: String,
    #[validate(length(min = 1))]
    pub product_hash: String,
    pub product_id: u64,
    pub offer_id: u64,
    /// Title used when a cart item has no name
    #[validate(length(min = 1))]
    pub item_title_fallback: String,
    /// Title of the line item synthesized for an empty cart
    #[validate(length(min = 1))]
    pub synthetic_item_title: String,
}

impl Default for ProductConfig {
    fn default() -> Self {
        Self {
            offer_hash: "9cfdc".to_string(),
            product_hash: "manuudoces".to_string(),
            product_id: 6561,
            offer_id: 9535,
            item_title_fallback: "Produto".to_string(),
            synthetic_item_title: "Produto Digital".to_string(),
        }
    }
}

/// Fixed address fields sent with every transaction
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AddressConfig {
    pub street_name: String,
    pub number: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Default for AddressConfig {
    fn default() -> Self {
        Self {
            street_name: "Rua Exemplo".to_string(),
            number: "123".to_string(),
            complement: "Ap 101".to_string(),
            neighborhood: "Centro".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            zip_code: "01502000".to_string(),
        }
    }
}

/// Checkout configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CheckoutConfig {
    /// Fallbacks for absent customer fields
    #[validate(nested)]
    pub customer_defaults: CustomerDefaults,

    /// Fixed product and offer identifiers
    #[validate(nested)]
    pub product: ProductConfig,

    /// Fixed address block
    pub address: AddressConfig,

    /// Installment count sent to the gateway
    #[validate(range(min = 1, max = 12))]
    pub installments: u32,

    /// Gateway-side transaction expiry in days
    #[validate(range(min = 1, max = 30))]
    pub expire_in_days: u32,

    /// Minutes until the PIX code shown to the caller expires
    #[validate(range(min = 1, max = 1440))]
    pub pix_expire_minutes: i64,

    /// Transaction origin tag
    #[validate(length(min = 1))]
    pub transaction_origin: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            customer_defaults: CustomerDefaults::default(),
            product: ProductConfig::default(),
            address: AddressConfig::default(),
            installments: 1,
            expire_in_days: 1,
            pix_expire_minutes: 30,
            transaction_origin: "api".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Payment gateway configuration
    pub gateway: GatewayConfig,

    /// Server configuration
    pub server: ServerConfig,

    /// Security configuration
    pub security: SecurityConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Checkout configuration
    pub checkout: CheckoutConfig,
}

impl AppConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("Conf").required(false))
            .add_source(config::Environment::with_prefix("PIX_RELAY").separator("__"))
            .build()
            .map_err(|e| {
                crate::shared::error::AppError::Config(format!(
                    "Failed to build configuration: {}",
                    e
                ))
            })?;

        let config: AppConfig = config.try_deserialize().map_err(|e| {
            crate::shared::error::AppError::Config(format!(
                "Failed to deserialize configuration: {}",
                e
            ))
        })?;

        config.validate_config().map_err(|e| {
            crate::shared::error::AppError::Validation(format!(
                "Configuration validation failed: {}",
                e
            ))
        })?;

        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate_config(&self) -> Result<(), validator::ValidationErrors> {
        self.gateway.validate()?;
        self.server.validate()?;
        self.security.validate()?;
        self.logging.validate()?;
        self.checkout.validate()?;

        Ok(())
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }

    /// Check if CORS is configured for any origin
    pub fn cors_allow_any_origin(&self) -> bool {
        self.security.cors_origins.contains(&"*".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate_config().is_ok());
    }

    #[test]
    fn test_default_gateway_constants() {
        let config = AppConfig::default();
        assert!(config.gateway.base_url.ends_with('/'));
        assert_eq!(config.gateway.timeout_seconds, 10);
        assert_eq!(config.checkout.installments, 1);
        assert_eq!(config.checkout.expire_in_days, 1);
        assert_eq!(config.checkout.pix_expire_minutes, 30);
        assert_eq!(config.checkout.transaction_origin, "api");
    }

    #[test]
    fn test_server_address() {
        let mut config = AppConfig::default();
        config.server.bind_address = "127.0.0.1".parse().unwrap();
        config.server.port = 3001;
        assert_eq!(config.server_address(), "127.0.0.1:3001");
    }

    #[test]
    fn test_cors_allow_any_origin() {
        let mut config = AppConfig::default();
        assert!(config.cors_allow_any_origin());

        config.security.cors_origins = vec!["https://loja.example.com".to_string()];
        assert!(!config.cors_allow_any_origin());
    }

    #[test]
    fn test_invalid_gateway_url_rejected() {
        let mut config = AppConfig::default();
        config.gateway.base_url = "not-a-url".to_string();
        assert!(config.validate_config().is_err());
    }

    #[test]
    fn test_empty_api_token_rejected() {
        let mut config = AppConfig::default();
        config.gateway.api_token = String::new();
        assert!(config.validate_config().is_err());
    }
}
