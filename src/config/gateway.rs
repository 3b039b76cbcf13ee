//! Execution gateway configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::gateway::HttpGatewayConfig;

/// Execution gateway configuration
///
/// Without an endpoint the service runs against the scripted mock gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// URL tool calls are posted to
    pub endpoint: Option<String>,

    /// Key sent as `x-api-key`
    pub api_key: Option<Secret<String>>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on transient failures
    #[serde(default = "default_retries")]
    pub max_retries: u32,

    /// First retry delay in milliseconds
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,
}

impl GatewayConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a remote gateway is configured
    pub fn has_endpoint(&self) -> bool {
        self.endpoint.as_ref().is_some_and(|e| !e.trim().is_empty())
    }

    /// Build the HTTP adapter configuration, if an endpoint is set
    pub fn http_config(&self) -> Option<HttpGatewayConfig> {
        if !self.has_endpoint() {
            return None;
        }
        let endpoint = self.endpoint.as_deref()?.trim();
        let mut config = HttpGatewayConfig::new(endpoint)
            .with_timeout(self.timeout())
            .with_max_retries(self.max_retries)
            .with_backoff(Duration::from_millis(self.backoff_ms));
        if let Some(key) = self
            .api_key
            .as_ref()
            .map(|k| k.expose_secret())
            .filter(|k| !k.is_empty())
        {
            config = config.with_api_key(key.clone());
        }
        Some(config)
    }

    /// Validate gateway configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(endpoint) = self.endpoint.as_deref().filter(|_| self.has_endpoint()) {
            let endpoint = endpoint.trim();
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ValidationError::InvalidGatewayEndpoint);
            }
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.max_retries > 10 {
            return Err(ValidationError::TooManyRetries);
        }
        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
            backoff_ms: default_backoff_ms(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_retries() -> u32 {
    2
}

fn default_backoff_ms() -> u64 {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_config_defaults() {
        let config = GatewayConfig::default();
        assert!(!config.has_endpoint());
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_retries, 2);
        assert!(config.http_config().is_none());
    }

    #[test]
    fn test_http_config_carries_settings() {
        let config = GatewayConfig {
            endpoint: Some("https://tools.example.com/invoke".to_string()),
            timeout_secs: 10,
            max_retries: 1,
            ..Default::default()
        };
        let http = config.http_config().unwrap();
        assert_eq!(http.endpoint, "https://tools.example.com/invoke");
        assert_eq!(http.timeout, Duration::from_secs(10));
        assert_eq!(http.max_retries, 1);
    }

    #[test]
    fn test_api_key_is_redacted_in_debug() {
        let config = GatewayConfig {
            endpoint: Some("https://tools.example.com".to_string()),
            api_key: Some(Secret::new("super-secret".to_string())),
            ..Default::default()
        };
        assert!(!format!("{:?}", config).contains("super-secret"));
        assert!(config.http_config().is_some());
    }

    #[test]
    fn test_blank_endpoint_means_mock() {
        let config = GatewayConfig {
            endpoint: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(!config.has_endpoint());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_non_http_endpoint() {
        let config = GatewayConfig {
            endpoint: Some("ftp://tools".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidGatewayEndpoint)
        ));
    }

    #[test]
    fn test_validation_rejects_excess_retries() {
        let config = GatewayConfig {
            max_retries: 11,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
