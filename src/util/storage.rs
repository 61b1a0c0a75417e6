//! Durable key-value storage behind a swappable backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store persists the signed-in identity here and the request
//! pipeline reads the credential from here at send time, so both sides share
//! one handle type. In the browser the backend is origin-scoped
//! `localStorage`; native builds and tests get an isolated in-memory map so
//! storage behavior stays exercisable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! All operations are best-effort: a missing or unwritable store degrades to
//! "no value" rather than an error, because persisted state must never crash
//! the application shell.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Raw string key-value contract shared by all storage backends.
pub trait KeyValueBackend: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// Cloneable handle to a storage backend. Clones share the same backend, so
/// a store and a pipeline constructed from the same handle observe each
/// other's writes.
#[derive(Clone)]
pub struct StorageHandle(Arc<dyn KeyValueBackend>);

impl StorageHandle {
    /// Browser `localStorage`. Outside the browser this degrades to an
    /// isolated in-memory map so callers never have to special-case.
    pub fn browser() -> Self {
        #[cfg(feature = "csr")]
        {
            Self(Arc::new(BrowserBackend))
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::memory()
        }
    }

    /// Fresh in-memory storage, one isolated map per call.
    pub fn memory() -> Self {
        Self(Arc::new(MemoryBackend::default()))
    }

    pub fn read(&self, key: &str) -> Option<String> {
        self.0.read(key)
    }

    pub fn write(&self, key: &str, value: &str) {
        self.0.write(key, value);
    }

    pub fn delete(&self, key: &str) {
        self.0.delete(key);
    }
}

/// In-memory backend for tests and native builds.
#[derive(Default)]
struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
}

impl KeyValueBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn delete(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }
}

/// `localStorage` backend. Stateless: every call re-resolves the window, so
/// the type stays a plain unit struct and the handle stays `Send`.
#[cfg(feature = "csr")]
struct BrowserBackend;

#[cfg(feature = "csr")]
impl BrowserBackend {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "csr")]
impl KeyValueBackend for BrowserBackend {
    fn read(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn delete(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
