//! Storefront core types and utilities
//!
//! Storage keys, the injected key-value store abstraction, the credential
//! session accessor, API configuration and small display helpers shared by
//! the storefront client crates.

pub mod config;
pub mod error;
pub mod format;
pub mod layout;
pub mod session;
pub mod storage;

#[cfg(all(feature = "tracing", not(target_arch = "wasm32")))]
pub mod tracing;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

#[cfg(any(test, feature = "tests"))]
pub mod tests;

pub use config::{ApiConfig, Environment};
pub use error::{CoreError, CoreResult};
pub use format::format_number;
pub use layout::{Breakpoint, Breakpoints};
pub use session::{Redirect, Session, bearer};
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;
pub use storage::{KeyValueStore, MemoryStore, StorageKeys};
