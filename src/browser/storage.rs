//! `localStorage`-backed [`PreferenceStore`].
//!
//! Storage can be missing or throw (private browsing, disabled cookies).
//! Reads then behave as "no stored value" and writes are dropped.

use web_sys::{Storage, Window};

use crate::theme::PreferenceStore;

pub struct LocalStoragePreferences {
    storage: Option<Storage>,
}

impl LocalStoragePreferences {
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("storage: localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStoragePreferences {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("storage: read {key} failed: {err:?}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("storage: write {key} failed: {err:?}");
        }
    }
}
