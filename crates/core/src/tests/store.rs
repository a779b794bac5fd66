//! Test harness for KeyValueStore implementations
//!
//! Any backend (including third-party ones) can run this suite to check it
//! behaves the way the session accessor expects.

use crate::{CoreResult, KeyValueStore, StorageKeys};

/// Test suite for KeyValueStore implementations
pub struct KeyValueStoreTestSuite<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> KeyValueStoreTestSuite<S> {
    /// Create a new test suite with the given store
    ///
    /// The store is expected to start empty.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Run all tests
    pub async fn run_all_tests(&self) -> CoreResult<()> {
        self.test_get_set().await?;
        self.test_overwrite().await?;
        self.test_remove().await?;
        self.test_clear().await?;
        Ok(())
    }

    /// Values round-trip and absent keys read as `None`
    pub async fn test_get_set(&self) -> CoreResult<()> {
        assert!(
            self.store.get("suite-missing").await?.is_none(),
            "Absent key should read as None"
        );

        self.store.set(StorageKeys::ACCESS_TOKEN, "suite-token").await?;
        assert_eq!(
            self.store.get(StorageKeys::ACCESS_TOKEN).await?.as_deref(),
            Some("suite-token")
        );
        assert!(self.store.contains(StorageKeys::ACCESS_TOKEN).await?);

        // Empty strings are values, not absence
        self.store.set("suite-empty", "").await?;
        assert_eq!(self.store.get("suite-empty").await?.as_deref(), Some(""));

        self.store.clear().await
    }

    /// A second set replaces the first
    pub async fn test_overwrite(&self) -> CoreResult<()> {
        self.store.set(StorageKeys::USER, r#"{"id":1}"#).await?;
        self.store.set(StorageKeys::USER, r#"{"id":2}"#).await?;
        assert_eq!(
            self.store.get(StorageKeys::USER).await?.as_deref(),
            Some(r#"{"id":2}"#)
        );

        self.store.clear().await
    }

    /// Removing touches only the named key and tolerates absent keys
    pub async fn test_remove(&self) -> CoreResult<()> {
        self.store.set(StorageKeys::ACCESS_TOKEN, "a").await?;
        self.store.set(StorageKeys::CART_DATA, "[]").await?;

        self.store.remove(StorageKeys::ACCESS_TOKEN).await?;
        self.store.remove(StorageKeys::ACCESS_TOKEN).await?;
        self.store.remove("suite-never-set").await?;

        assert!(!self.store.contains(StorageKeys::ACCESS_TOKEN).await?);
        assert_eq!(
            self.store.get(StorageKeys::CART_DATA).await?.as_deref(),
            Some("[]")
        );

        self.store.clear().await
    }

    /// Clear removes every key
    pub async fn test_clear(&self) -> CoreResult<()> {
        for key in StorageKeys::ALL {
            self.store.set(key, "value").await?;
        }
        self.store.set("foreign-key", "kept by someone else").await?;

        self.store.clear().await?;

        for key in StorageKeys::ALL {
            assert!(
                self.store.get(key).await?.is_none(),
                "{key} should be gone after clear"
            );
        }
        assert!(self.store.get("foreign-key").await?.is_none());

        // Clearing an empty store is fine
        self.store.clear().await
    }
}
