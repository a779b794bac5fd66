//! Wire types for the account endpoints

use serde::{Deserialize, Serialize};

/// Body of `POST /accounts/token/refresh`
///
/// A missing refresh token is sent as `null` so the server rejects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: Option<String>,
}

/// Successful refresh response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// New access token
    pub access: String,
}
