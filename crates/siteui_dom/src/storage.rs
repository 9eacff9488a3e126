//! Origin-scoped key-value storage.

use crate::DomError;
use std::cell::RefCell;
use std::collections::HashMap;

/// Key-value persistence that survives page reloads.
pub trait PreferenceStore {
    /// Read a value. `Ok(None)` means the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, DomError>;

    /// Write a value, overwriting any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), DomError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, DomError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomError> {
        (**self).set(key, value)
    }
}

/// In-memory store, used in tests and when `localStorage` is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects every write, like a full quota.
    pub fn read_only() -> Self {
        Self {
            entries: RefCell::default(),
            read_only: true,
        }
    }

    /// Seed an entry without going through [`PreferenceStore::set`].
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomError> {
        if self.read_only {
            return Err(DomError::storage("store is read-only"));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The browser's `localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    /// Open the window's `localStorage`.
    pub fn open(window: &web_sys::Window) -> Result<Self, DomError> {
        let storage = window
            .local_storage()
            .map_err(|e| DomError::storage(format!("localStorage access error: {:?}", e)))?
            .ok_or_else(|| DomError::storage("localStorage not available"))?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, DomError> {
        self.storage
            .get_item(key)
            .map_err(|e| DomError::storage(format!("Failed to read '{}': {:?}", key, e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| DomError::storage(format!("Failed to write '{}': {:?}", key, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme"), Ok(None));
        assert!(store.is_empty());

        store.set("theme", "dark").unwrap();
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme"), Ok(Some("light".to_string())));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_read_only_store_rejects_writes() {
        let store = MemoryStore::read_only();
        assert!(matches!(
            store.set("theme", "dark"),
            Err(DomError::Storage(_))
        ));
        assert_eq!(store.get("theme"), Ok(None));
    }

    #[test]
    fn test_boxed_store_delegates() {
        let store: Box<dyn PreferenceStore> = Box::new(MemoryStore::new().with_entry("k", "v"));
        assert_eq!(store.get("k"), Ok(Some("v".to_string())));
    }
}
