//! Browser bindings: `localStorage`, `sessionStorage` and `window.location`

use crate::{CoreError, CoreResult, KeyValueStore, Redirect};
use async_trait::async_trait;
use gloo::storage::{LocalStorage, SessionStorage, Storage};

fn js_error(op: &str, err: &wasm_bindgen::JsValue) -> CoreError {
    CoreError::storage_error(format!("{op} failed: {err:?}"))
}

macro_rules! browser_store {
    ($name:ident, $backing:ty, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $name;

        #[async_trait]
        impl KeyValueStore for $name {
            async fn get(&self, key: &str) -> CoreResult<Option<String>> {
                <$backing>::raw()
                    .get_item(key)
                    .map_err(|e| js_error("getItem", &e))
            }

            async fn set(&self, key: &str, value: &str) -> CoreResult<()> {
                <$backing>::raw()
                    .set_item(key, value)
                    .map_err(|e| js_error("setItem", &e))
            }

            async fn remove(&self, key: &str) -> CoreResult<()> {
                <$backing>::raw()
                    .remove_item(key)
                    .map_err(|e| js_error("removeItem", &e))
            }

            async fn clear(&self) -> CoreResult<()> {
                <$backing>::raw()
                    .clear()
                    .map_err(|e| js_error("clear", &e))
            }
        }
    };
}

browser_store!(
    LocalStore,
    LocalStorage,
    "Persistent store backed by `window.localStorage`"
);
browser_store!(
    SessionStore,
    SessionStorage,
    "Ephemeral store backed by `window.sessionStorage`"
);

/// Host name the page was served from
///
/// # Errors
///
/// Returns an error outside a browsing context
pub fn current_host() -> CoreResult<String> {
    gloo::utils::window()
        .location()
        .hostname()
        .map_err(|e| CoreError::internal_error(format!("location.hostname: {e:?}")))
}

/// Navigate the page to the redirect target
///
/// # Errors
///
/// Returns an error if the browser rejects the navigation
pub fn follow(redirect: &Redirect) -> CoreResult<()> {
    tracing::debug!(location = redirect.location(), "Navigating");
    gloo::utils::window()
        .location()
        .set_href(redirect.location())
        .map_err(|e| CoreError::internal_error(format!("location.href: {e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::store::KeyValueStoreTestSuite;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn local_store_passes_suite() {
        LocalStore.clear().await.unwrap();
        KeyValueStoreTestSuite::new(LocalStore)
            .run_all_tests()
            .await
            .unwrap();
    }

    #[wasm_bindgen_test]
    async fn session_store_passes_suite() {
        SessionStore.clear().await.unwrap();
        KeyValueStoreTestSuite::new(SessionStore)
            .run_all_tests()
            .await
            .unwrap();
    }

    #[wasm_bindgen_test]
    async fn stores_are_independent() {
        LocalStore.clear().await.unwrap();
        SessionStore.clear().await.unwrap();

        LocalStore.set("access_token", "a").await.unwrap();
        assert!(SessionStore.get("access_token").await.unwrap().is_none());

        SessionStore.clear().await.unwrap();
        assert_eq!(
            LocalStore.get("access_token").await.unwrap().as_deref(),
            Some("a")
        );
        LocalStore.clear().await.unwrap();
    }

    #[wasm_bindgen_test]
    fn current_host_reads_location() {
        let host = current_host().unwrap();
        assert_eq!(
            host,
            gloo::utils::window().location().hostname().unwrap()
        );
        assert!(!host.is_empty());
    }
}
