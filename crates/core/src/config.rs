//! API endpoint configuration and base URL resolution

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Path the client is sent to when the session ends
pub const DEFAULT_LOGIN_PATH: &str = "/pages/login/login.html";

/// Token refresh endpoint, relative to the base URL
pub const DEFAULT_REFRESH_PATH: &str = "/accounts/token/refresh";

/// Deployment environment the client is running in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    /// Classify a host name. Only `localhost` and `127.0.0.1` count as local.
    pub fn detect(host: &str) -> Self {
        match host {
            "localhost" | "127.0.0.1" => Self::Local,
            _ => Self::Production,
        }
    }
}

/// Storefront API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL used during local development
    pub local_url: String,

    /// Base URL used everywhere else
    pub production_url: String,

    /// Where the client is redirected when the session ends
    pub login_path: String,

    /// Token refresh endpoint, appended to the base URL
    pub refresh_path: String,

    /// Request timeout in seconds; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            local_url: "http://localhost:3000/api".to_string(),
            production_url: "https://your-backend-api.vercel.app/api".to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            refresh_path: DEFAULT_REFRESH_PATH.to_string(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Base URL for an environment
    pub fn base_url(&self, environment: Environment) -> &str {
        match environment {
            Environment::Local => &self.local_url,
            Environment::Production => &self.production_url,
        }
    }

    /// Base URL for the host the client is served from
    pub fn base_url_for(&self, host: &str) -> &str {
        self.base_url(Environment::detect(host))
    }

    /// Load configuration with defaults and environment variables
    ///
    /// Variables use the `STOREFRONT` prefix, e.g. `STOREFRONT__PRODUCTION_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables cannot be parsed or the
    /// resulting configuration is invalid
    pub fn from_env() -> CoreResult<Self> {
        Self::from_env_source(Self::env_source())
    }

    fn from_env_source(env: config::Environment) -> CoreResult<Self> {
        let settings = Self::builder_with_defaults()?.add_source(env).build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file, with environment variables on top
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> CoreResult<Self> {
        let settings = Self::builder_with_defaults()?
            .add_source(config::File::from(path.as_ref()))
            .add_source(Self::env_source())
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check that both base URLs parse and the paths are absolute
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] naming the offending field
    pub fn validate(&self) -> CoreResult<()> {
        for (field, value) in [
            ("local_url", &self.local_url),
            ("production_url", &self.production_url),
        ] {
            url::Url::parse(value)
                .map_err(|e| CoreError::invalid_config(format!("{field} '{value}': {e}")))?;
        }

        for (field, value) in [
            ("login_path", &self.login_path),
            ("refresh_path", &self.refresh_path),
        ] {
            if !value.starts_with('/') {
                return Err(CoreError::invalid_config(format!(
                    "{field} must start with '/', got '{value}'"
                )));
            }
        }

        Ok(())
    }

    fn builder_with_defaults()
    -> CoreResult<config::ConfigBuilder<config::builder::DefaultState>> {
        let defaults = Self::default();

        Ok(config::Config::builder()
            .set_default("local_url", defaults.local_url)?
            .set_default("production_url", defaults.production_url)?
            .set_default("login_path", defaults.login_path)?
            .set_default("refresh_path", defaults.refresh_path)?)
    }

    fn env_source() -> config::Environment {
        config::Environment::with_prefix("STOREFRONT")
            .prefix_separator("__")
            .separator("__")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loopback_hosts_are_local() {
        assert_eq!(Environment::detect("localhost"), Environment::Local);
        assert_eq!(Environment::detect("127.0.0.1"), Environment::Local);
    }

    #[test]
    fn other_hosts_are_production() {
        for host in [
            "shop.example.com",
            "user.github.io",
            "localhost.example.com",
            "127.0.0.2",
            "LOCALHOST",
            "",
        ] {
            assert_eq!(Environment::detect(host), Environment::Production, "{host}");
        }
    }

    #[test]
    fn base_url_for_host() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url_for("localhost"), "http://localhost:3000/api");
        assert_eq!(config.base_url_for("127.0.0.1"), "http://localhost:3000/api");
        assert_eq!(
            config.base_url_for("shop.example.com"),
            "https://your-backend-api.vercel.app/api"
        );
    }

    #[test]
    fn default_config_is_valid() {
        let config = ApiConfig::default();
        config.validate().unwrap();
        assert_eq!(config.login_path, "/pages/login/login.html");
        assert_eq!(config.refresh_path, "/accounts/token/refresh");
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let config = ApiConfig {
            production_url: "not a url".to_string(),
            ..ApiConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfig { .. })
        ));

        let config = ApiConfig {
            login_path: "login.html".to_string(),
            ..ApiConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfig { .. })
        ));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn from_file_overrides_defaults() {
        use std::io::Write;

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "production_url = \"https://api.shop.example.com\"\ntimeout_secs = 15"
        )
        .unwrap();

        let config = ApiConfig::from_file(file.path()).unwrap();
        assert_eq!(config.production_url, "https://api.shop.example.com");
        assert_eq!(config.local_url, "http://localhost:3000/api");
        assert_eq!(config.timeout_secs, Some(15));
    }

    fn env_with(vars: &[(&str, &str)]) -> config::Environment {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<config::Map<_, _>>();
        ApiConfig::env_source().source(Some(vars))
    }

    #[test]
    fn from_env_reads_prefixed_variables() {
        let config = ApiConfig::from_env_source(env_with(&[
            ("STOREFRONT__PRODUCTION_URL", "https://api.shop.example.com"),
            ("STOREFRONT__LOGIN_PATH", "/login"),
            ("STOREFRONT__TIMEOUT_SECS", "15"),
            ("OTHER__LOCAL_URL", "http://ignored"),
        ]))
        .unwrap();

        assert_eq!(config.production_url, "https://api.shop.example.com");
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.timeout_secs, Some(15));
        assert_eq!(config.local_url, "http://localhost:3000/api");
        assert_eq!(config.refresh_path, "/accounts/token/refresh");
    }

    #[test]
    fn from_env_without_variables_is_default() {
        let config = ApiConfig::from_env_source(env_with(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn from_env_validates() {
        let err = ApiConfig::from_env_source(env_with(&[("STOREFRONT__REFRESH_PATH", "refresh")]))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig { .. }));
    }
}
