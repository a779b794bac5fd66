//! Credential and session accessors over the injected stores

use crate::config::DEFAULT_LOGIN_PATH;
use crate::{CoreError, CoreResult, KeyValueStore, StorageKeys};
use http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Client-side navigation the caller should perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    location: String,
}

impl Redirect {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

/// `Bearer <token>` header value
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Accessor for the credential keys in the persistent store plus the
/// ephemeral store that is wiped on logout
#[derive(Clone)]
pub struct Session {
    persistent: Arc<dyn KeyValueStore>,
    ephemeral: Arc<dyn KeyValueStore>,
    login_path: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("login_path", &self.login_path)
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(persistent: Arc<dyn KeyValueStore>, ephemeral: Arc<dyn KeyValueStore>) -> Self {
        Self {
            persistent,
            ephemeral,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }

    /// Override where logout and session expiry send the client
    #[must_use]
    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn login_redirect(&self) -> Redirect {
        Redirect::to(&self.login_path)
    }

    pub async fn access_token(&self) -> CoreResult<Option<String>> {
        self.persistent.get(StorageKeys::ACCESS_TOKEN).await
    }

    pub async fn refresh_token(&self) -> CoreResult<Option<String>> {
        self.persistent.get(StorageKeys::REFRESH_TOKEN).await
    }

    pub async fn set_access_token(&self, token: &str) -> CoreResult<()> {
        self.persistent.set(StorageKeys::ACCESS_TOKEN, token).await
    }

    /// Persist the token pair issued by a login
    pub async fn store_tokens(&self, access: &str, refresh: &str) -> CoreResult<()> {
        self.persistent.set(StorageKeys::ACCESS_TOKEN, access).await?;
        self.persistent.set(StorageKeys::REFRESH_TOKEN, refresh).await
    }

    /// Logged in means a non-empty access token is stored, nothing more
    pub async fn is_logged_in(&self) -> CoreResult<bool> {
        Ok(self.access_token().await?.is_some_and(|t| !t.is_empty()))
    }

    /// The stored user profile
    ///
    /// # Errors
    ///
    /// A stored value that is not valid JSON for `T` is a
    /// [`CoreError::Serialization`] error, not `None`.
    pub async fn user<T: DeserializeOwned>(&self) -> CoreResult<Option<T>> {
        self.read_json(StorageKeys::USER).await
    }

    pub async fn store_user<T: Serialize + Sync>(&self, user: &T) -> CoreResult<()> {
        self.write_json(StorageKeys::USER, user).await
    }

    pub async fn cart_data<T: DeserializeOwned>(&self) -> CoreResult<Option<T>> {
        self.read_json(StorageKeys::CART_DATA).await
    }

    pub async fn store_cart_data<T: Serialize + Sync>(&self, cart: &T) -> CoreResult<()> {
        self.write_json(StorageKeys::CART_DATA, cart).await
    }

    pub async fn order_data<T: DeserializeOwned>(&self) -> CoreResult<Option<T>> {
        self.read_json(StorageKeys::ORDER_DATA).await
    }

    pub async fn store_order_data<T: Serialize + Sync>(&self, order: &T) -> CoreResult<()> {
        self.write_json(StorageKeys::ORDER_DATA, order).await
    }

    /// Headers for a JSON API call, with a bearer token only when one is stored
    pub async fn auth_headers(&self) -> CoreResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.access_token().await?.filter(|t| !t.is_empty()) {
            let value = HeaderValue::from_str(&bearer(&token)).map_err(|e| {
                CoreError::storage_error(format!("stored access token is not a valid header: {e}"))
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    /// Drop the credential keys and the ephemeral store
    ///
    /// Cart and order data stay in the persistent store. Safe to call any
    /// number of times; the result is always a redirect to the login page.
    pub async fn logout(&self) -> CoreResult<Redirect> {
        for key in StorageKeys::CREDENTIALS {
            self.persistent.remove(key).await?;
        }
        self.ephemeral.clear().await?;

        tracing::info!(location = %self.login_path, "Logged out");
        Ok(self.login_redirect())
    }

    /// Wipe both stores entirely
    pub async fn clear_all(&self) -> CoreResult<()> {
        self.persistent.clear().await?;
        self.ephemeral.clear().await
    }

    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> CoreResult<Option<T>> {
        match self.persistent.get(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn write_json<T: Serialize + Sync>(&self, key: &str, value: &T) -> CoreResult<()> {
        let raw = serde_json::to_string(value)?;
        self.persistent.set(key, &raw).await
    }
}
