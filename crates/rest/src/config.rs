//! Server configuration for the FHIR REST API.
//!
//! Every setting can be given on the command line or through an environment
//! variable.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `FHIR_PORT` | 3003 | Server port |
//! | `FHIR_HOST` | 127.0.0.1 | Host to bind |
//! | `FHIR_LOG_LEVEL` | info | Log level |
//! | `FHIR_BASE_PATH` | /fhir | Path prefix of every FHIR route |
//! | `FHIR_BASE_URL` | http://localhost:3003/fhir | Public base URL (Location headers, fullUrl) |
//! | `FHIR_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `FHIR_MAX_BODY_SIZE` | 52428800 | Max request body (bytes) |
//!
//! # Example
//!
//! ```rust
//! use onecare_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 8080,
//!     host: "0.0.0.0".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(config.socket_addr(), "0.0.0.0:8080");
//! ```

use clap::Parser;

/// Server configuration for the FHIR REST API.
#[derive(Debug, Clone, Parser)]
#[command(name = "onecare-fhir")]
#[command(about = "OneCare FHIR server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "FHIR_PORT", default_value = "3003")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "FHIR_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "FHIR_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Path prefix under which the FHIR routes are mounted.
    #[arg(long, env = "FHIR_BASE_PATH", default_value = "/fhir")]
    pub base_path: String,

    /// Public base URL (used in Location headers and Bundle entry fullUrls).
    #[arg(long, env = "FHIR_BASE_URL", default_value = "http://localhost:3003/fhir")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[arg(long, env = "FHIR_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Maximum request body size in bytes.
    #[arg(long, env = "FHIR_MAX_BODY_SIZE", default_value = "52428800")]
    pub max_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3003,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            base_path: "/fhir".to_string(),
            base_url: "http://localhost:3003/fhir".to_string(),
            request_timeout: 30,
            max_body_size: 50 * 1024 * 1024, // 50MB
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Returns the route prefix without a trailing slash (empty for root).
    pub fn base_path(&self) -> &str {
        self.base_path.trim_end_matches('/')
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if !self.base_path.is_empty() && !self.base_path.starts_with('/') {
            errors.push("Base path must start with '/'".to_string());
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            errors.push("Base URL must be an http or https URL".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and a short timeout.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            base_path: "/fhir".to_string(),
            base_url: "http://localhost/fhir".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            max_body_size: 1024 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3003);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.base_path(), "/fhir");
        assert_eq!(config.max_body_size, 52_428_800);
    }

    #[test]
    fn test_parse_defaults_match_default_impl() {
        let parsed = ServerConfig::try_parse_from(["onecare-fhir"]).unwrap();
        let default = ServerConfig::default();
        assert_eq!(parsed.port, default.port);
        assert_eq!(parsed.base_url, default.base_url);
        assert_eq!(parsed.max_body_size, default.max_body_size);
    }

    #[test]
    fn test_parse_args() {
        let config = ServerConfig::try_parse_from([
            "onecare-fhir",
            "--port",
            "9000",
            "--base-path",
            "/api/fhir",
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.base_path(), "/api/fhir");
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_trailing_slashes_trimmed() {
        let config = ServerConfig {
            base_path: "/fhir/".to_string(),
            base_url: "http://example.org/fhir/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.base_path(), "/fhir");
        assert_eq!(config.base_url(), "http://example.org/fhir");
    }

    #[test]
    fn test_validate_valid() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_invalid() {
        let config = ServerConfig {
            port: 0,
            base_path: "fhir".to_string(),
            base_url: "localhost".to_string(),
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("Port")));
    }

    #[test]
    fn test_for_testing() {
        let config = ServerConfig::for_testing();
        assert_eq!(config.port, 0);
        assert_eq!(config.request_timeout, 5);
    }
}
