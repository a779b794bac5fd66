//! Key-value storage backends for session and credential data
//!
//! Every value is a plain string. Structured values (user profile, cart,
//! order) are JSON documents encoded by the caller.

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
pub mod keys;
pub mod memory;

use crate::CoreResult;
use async_trait::async_trait;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
pub use keys::StorageKeys;
pub use memory::MemoryStore;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when the key is absent
    async fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Insert or replace a value
    async fn set(&self, key: &str, value: &str) -> CoreResult<()>;

    /// Remove a key; removing an absent key is not an error
    async fn remove(&self, key: &str) -> CoreResult<()>;

    /// Remove every key
    async fn clear(&self) -> CoreResult<()>;

    /// Presence check
    async fn contains(&self, key: &str) -> CoreResult<bool> {
        Ok(self.get(key).await?.is_some())
    }
}

// Mock implementation for testing
#[cfg(test)]
pub mod mock {
    use super::*;
    use mockall::mock;

    mock! {
        pub KeyValueStore {}

        #[async_trait]
        impl KeyValueStore for KeyValueStore {
            async fn get(&self, key: &str) -> CoreResult<Option<String>>;
            async fn set(&self, key: &str, value: &str) -> CoreResult<()>;
            async fn remove(&self, key: &str) -> CoreResult<()>;
            async fn clear(&self) -> CoreResult<()>;
        }
    }
}
