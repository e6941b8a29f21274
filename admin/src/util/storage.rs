//! Browser `localStorage` access.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only read behavior so the auth header provider does
//! not repeat web-sys glue. Outside the browser every read yields `None`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Read the raw string stored under `key`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}
