//! Browser localStorage write-through helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store mirrors every mutation into persisted storage. In the
//! browser (hydrate) that is `localStorage`; on the server and under native
//! tests a thread-local map stands in, so write-through behavior stays
//! observable in every build.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(not(feature = "hydrate"))]
use std::cell::RefCell;
#[cfg(not(feature = "hydrate"))]
use std::collections::HashMap;

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static FALLBACK: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
}

/// Load the raw string stored under `key`, if any.
#[must_use]
pub fn load(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK.with(|map| map.borrow().get(key).cloned())
    }
}

/// Store `value` under `key`.
pub fn store(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK.with(|map| map.borrow_mut().insert(key.to_owned(), value.to_owned()));
    }
}

/// Remove `key` entirely.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.remove_item(key);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK.with(|map| map.borrow_mut().remove(key));
    }
}

/// Load and deserialize the JSON value stored under `key`.
#[must_use]
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load(key)?;
    serde_json::from_str(&raw).ok()
}

/// Serialize `value` and store it under `key`.
pub fn store_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    store(key, &raw);
}
