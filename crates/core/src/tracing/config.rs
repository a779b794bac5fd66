//! Configuration for tracing output

use serde::{Deserialize, Serialize};

/// Instrumentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentationConfig {
    /// Service name attached to the startup event
    pub service_name: String,
    /// Log level filter (e.g., "info", "debug", "storefront_http=trace")
    pub log_level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for InstrumentationConfig {
    fn default() -> Self {
        Self {
            service_name: "storefront".to_string(),
            log_level: "info".to_string(),
            json: false,
        }
    }
}

impl InstrumentationConfig {
    /// Create configuration from environment variables
    ///
    /// Supports the following environment variables:
    /// - `SERVICE_NAME`: Service name
    /// - `RUST_LOG`: Log level filter
    /// - `LOG_FORMAT`: `json` for JSON lines
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            service_name: std::env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            json: std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")),
        }
    }

    /// Create a development configuration with verbose client logging
    pub fn dev() -> Self {
        Self {
            service_name: "storefront-dev".to_string(),
            log_level: "debug,storefront_http=trace".to_string(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = InstrumentationConfig::default();
        assert_eq!(config.service_name, "storefront");
        assert_eq!(config.log_level, "info");
        assert!(!config.json);
    }

    #[test]
    fn json_flag_defaults_off_when_deserialized() {
        let config: InstrumentationConfig =
            serde_json::from_str(r#"{"service_name":"shop","log_level":"warn"}"#).unwrap();
        assert!(!config.json);
        assert_eq!(config.log_level, "warn");
    }
}
