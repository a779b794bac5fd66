//! Storefront HTTP client
//!
//! An authenticated client for the storefront API: it injects the stored
//! bearer token into every request and, when the API answers 401, refreshes
//! the token once and retries the request once.

pub mod client;
pub mod types;

pub use client::error::ClientError;
pub use client::{FetchOutcome, RefreshOutcome, StorefrontClient, StorefrontClientBuilder};
pub use storefront_core::{ApiConfig, KeyValueStore, Redirect, Session};
