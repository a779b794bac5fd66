//! Storefront API client

pub mod auth;
pub mod error;

pub use auth::{FetchOutcome, RefreshOutcome};

use error::ClientError;
use reqwest::{Client, ClientBuilder, IntoUrl};
use std::sync::Arc;
use std::time::Duration;
use storefront_core::config::DEFAULT_REFRESH_PATH;
use storefront_core::{ApiConfig, KeyValueStore, MemoryStore, Redirect, Session};

/// Storefront API client with stored-credential authentication
#[derive(Clone)]
pub struct StorefrontClient {
    client: Client,
    base_url: String,
    refresh_path: String,
    session: Session,
}

impl std::fmt::Debug for StorefrontClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontClient")
            .field("base_url", &self.base_url)
            .field("refresh_path", &self.refresh_path)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl StorefrontClient {
    /// Create a new client with in-memory stores
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> StorefrontClientBuilder {
        StorefrontClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the token refresh endpoint
    pub fn refresh_url(&self) -> String {
        format!("{}{}", self.base_url, self.refresh_path)
    }

    /// Credential accessor backing this client
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Drop stored credentials, see [`Session::logout`]
    pub async fn logout(&self) -> Result<Redirect, ClientError> {
        Ok(self.session.logout().await?)
    }

    /// Create a request builder for a path under the base URL
    ///
    /// No credentials are attached here; [`Self::fetch_with_auth`] adds them.
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Create a request builder for an absolute URL
    pub fn request_url<U: IntoUrl>(&self, method: reqwest::Method, url: U) -> reqwest::RequestBuilder {
        self.client.request(method, url)
    }

    /// Send an authenticated request and decode a JSON body
    ///
    /// Non-success statuses become [`ClientError::from_status`] errors and an
    /// expired session becomes [`ClientError::SessionExpired`].
    pub async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = match self.fetch_with_auth(request).await? {
            FetchOutcome::Response(response) => response,
            FetchOutcome::SessionExpired(redirect) => {
                return Err(ClientError::SessionExpired(redirect));
            }
        };
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }
}

/// Builder for StorefrontClient
#[derive(Default)]
pub struct StorefrontClientBuilder {
    base_url: Option<String>,
    persistent: Option<Arc<dyn KeyValueStore>>,
    ephemeral: Option<Arc<dyn KeyValueStore>>,
    login_path: Option<String>,
    refresh_path: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl StorefrontClientBuilder {
    /// Start from a loaded configuration, resolving the base URL for `host`
    pub fn from_config(config: &ApiConfig, host: &str) -> Self {
        let mut builder = Self::default()
            .base_url(config.base_url_for(host))
            .login_path(&config.login_path)
            .refresh_path(&config.refresh_path);
        if let Some(secs) = config.timeout_secs {
            builder.timeout = Some(Duration::from_secs(secs));
        }
        builder
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Store that survives restarts (tokens, user, cart, order)
    pub fn persistent_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.persistent = Some(store);
        self
    }

    /// Store wiped on logout
    pub fn ephemeral_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.ephemeral = Some(store);
        self
    }

    /// Set the page reported when the session ends
    pub fn login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = Some(path.into());
        self
    }

    /// Set the refresh endpoint path, relative to the base URL
    pub fn refresh_path(mut self, path: impl Into<String>) -> Self {
        self.refresh_path = Some(path.into());
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    ///
    /// Stores that were not supplied default to empty [`MemoryStore`]s.
    pub fn build(self) -> Result<StorefrontClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let refresh_path = self
            .refresh_path
            .unwrap_or_else(|| DEFAULT_REFRESH_PATH.to_string());
        if !refresh_path.starts_with('/') {
            return Err(ClientError::Configuration(format!(
                "refresh_path must start with '/', got '{refresh_path}'"
            )));
        }

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout; // Timeouts not supported on WASM

        client_builder = client_builder.user_agent(
            self.user_agent
                .unwrap_or_else(|| concat!("storefront-client/", env!("CARGO_PKG_VERSION")).to_string()),
        );

        let client = client_builder.build()?;

        let persistent = self
            .persistent
            .unwrap_or_else(|| Arc::new(MemoryStore::new()));
        let ephemeral = self
            .ephemeral
            .unwrap_or_else(|| Arc::new(MemoryStore::new()));
        let mut session = Session::new(persistent, ephemeral);
        if let Some(login_path) = self.login_path {
            session = session.with_login_path(login_path);
        }

        Ok(StorefrontClient {
            client,
            base_url,
            refresh_path,
            session,
        })
    }
}
