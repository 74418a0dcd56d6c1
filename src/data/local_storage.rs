//! `window.localStorage` as a [`KeyValueStore`].

use crate::data::store::KeyValueStore;
use crate::error::{GalleryError, GalleryResult};

pub struct LocalStorageStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStorageStore {
    /// Grab the page's localStorage. Private browsing modes may refuse it; the
    /// store then behaves as permanently empty and every write fails.
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable, catalog will use defaults");
        }
        Self { storage }
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> GalleryResult<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| GalleryError::Storage("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| GalleryError::Storage(format!("setItem({key}) failed: {e:?}")))
    }
}
