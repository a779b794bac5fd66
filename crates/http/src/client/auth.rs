//! Bearer injection and the one-shot refresh-and-retry flow

use super::{ClientError, StorefrontClient};
use crate::types::{RefreshRequest, RefreshResponse};
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Request, Response, StatusCode};
use storefront_core::{Redirect, bearer};
use tracing::{debug, info, warn};

/// Token placed in the bearer header when none is stored
pub const MISSING_TOKEN: &str = "undefined";

/// Result of [`StorefrontClient::fetch_with_auth`]
#[derive(Debug)]
pub enum FetchOutcome {
    /// The server's response, untouched, whatever its status
    Response(Response),
    /// Refresh was rejected and both stores were cleared; the caller should
    /// navigate to the redirect target
    SessionExpired(Redirect),
}

impl FetchOutcome {
    pub const fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired(_))
    }

    /// The response, if the session is still alive
    pub fn into_response(self) -> Option<Response> {
        match self {
            Self::Response(response) => Some(response),
            Self::SessionExpired(_) => None,
        }
    }
}

/// Result of a single call to the refresh endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// New access token, already persisted
    Refreshed(String),
    /// Endpoint answered with a non-success status
    Rejected(StatusCode),
}

fn set_bearer(request: &mut Request, token: &str) -> Result<(), ClientError> {
    let mut value = HeaderValue::from_str(&bearer(token))?;
    value.set_sensitive(true);
    request.headers_mut().insert(AUTHORIZATION, value);
    Ok(())
}

impl StorefrontClient {
    /// Send `request` with the stored access token as bearer credentials
    ///
    /// Any authorization header already on the request is replaced. On a 401
    /// the token is refreshed once; if that succeeds the request is sent once
    /// more with the new token and that response is returned as-is, even if
    /// it is another 401. If the refresh endpoint rejects the refresh token,
    /// both stores are cleared and [`FetchOutcome::SessionExpired`] is
    /// returned instead.
    ///
    /// # Errors
    ///
    /// Transport failures on any of the three calls, store failures, and an
    /// undecodable refresh response are returned as errors.
    pub async fn fetch_with_auth(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<FetchOutcome, ClientError> {
        let mut request = request.build()?;
        // Taken before the token is set; the retry gets its own header
        let retry = request.try_clone();

        let token = self.session.access_token().await?;
        set_bearer(&mut request, token.as_deref().unwrap_or(MISSING_TOKEN))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, has_token = token.is_some(), "Sending authenticated request");

        let response = self.client.execute(request).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(FetchOutcome::Response(response));
        }

        debug!(%method, %url, "Access token rejected, refreshing");
        match self.refresh_access_token().await? {
            RefreshOutcome::Refreshed(access) => {
                let mut retry = retry.ok_or(ClientError::RequestNotRetryable)?;
                set_bearer(&mut retry, &access)?;

                let response = self.client.execute(retry).await?;
                debug!(%method, %url, status = %response.status(), "Retried after refresh");
                Ok(FetchOutcome::Response(response))
            }
            RefreshOutcome::Rejected(status) => {
                self.session.clear_all().await?;
                let redirect = self.session.login_redirect();
                warn!(
                    %status,
                    location = redirect.location(),
                    "Refresh rejected, session cleared"
                );
                Ok(FetchOutcome::SessionExpired(redirect))
            }
        }
    }

    /// Exchange the stored refresh token for a new access token
    ///
    /// On success the new token is written to the persistent store before it
    /// is returned. A rejection changes nothing in the stores.
    ///
    /// # Errors
    ///
    /// Transport failures, store failures, and a success body without an
    /// `access` field.
    pub async fn refresh_access_token(&self) -> Result<RefreshOutcome, ClientError> {
        let body = RefreshRequest {
            refresh: self.session.refresh_token().await?,
        };

        // .json() also sets Content-Type: application/json
        let response = self
            .client
            .post(self.refresh_url())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Ok(RefreshOutcome::Rejected(status));
        }

        let RefreshResponse { access } = response.json().await?;
        self.session.set_access_token(&access).await?;
        info!("Access token refreshed");

        Ok(RefreshOutcome::Refreshed(access))
    }
}
