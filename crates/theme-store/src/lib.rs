//! Theme Store
//!
//! Persists a light/dark theme preference in a key-value store.
//! The browser backend is `window.localStorage`; `MemoryStore` serves
//! tests and hosts without a DOM.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

/// Display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored value. Anything other than `"dark"` is `Light`.
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from a preference backend
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference storage rejected the write: {0}")]
    Rejected(String),
}

/// Minimal string key-value store
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// `window.localStorage` backend
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Rejected(format!("{:?}", e)))
    }
}

/// In-memory backend
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Theme preference bound to one key of a backend
#[derive(Debug)]
pub struct ThemeStore<S> {
    backend: S,
    key: String,
}

impl<S: PreferenceStore> ThemeStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    /// Stored theme, `Light` when unset or unrecognized
    pub fn load(&self) -> Theme {
        self.backend
            .get(&self.key)
            .map(|v| Theme::parse(&v))
            .unwrap_or_default()
    }

    pub fn save(&self, theme: Theme) -> Result<(), StoreError> {
        log::debug!("[THEME] save {}={}", self.key, theme);
        self.backend.set(&self.key, theme.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults_to_light() {
        let backend = MemoryStore::new();
        assert_eq!(ThemeStore::new(&backend, "theme").load(), Theme::Light);
        assert_eq!(backend.get("theme"), None);
    }

    #[test]
    fn test_unrecognized_value_is_light() {
        let backend = MemoryStore::new();
        let store = ThemeStore::new(&backend, "theme");
        backend.set("theme", "solarized").unwrap();
        assert_eq!(store.load(), Theme::Light);
        backend.set("theme", "DARK").unwrap();
        assert_eq!(store.load(), Theme::Light);
    }

    #[test]
    fn test_save_then_load() {
        let backend = MemoryStore::new();
        let store = ThemeStore::new(&backend, "theme");
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(), Theme::Dark);
        assert_eq!(backend.get("theme").as_deref(), Some("dark"));
        store.save(Theme::Light).unwrap();
        assert_eq!(backend.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_keys_are_independent() {
        let backend = MemoryStore::new();
        backend.set("other", "dark").unwrap();
        let store = ThemeStore::new(&backend, "theme");
        assert_eq!(store.load(), Theme::Light);
    }

    #[test]
    fn test_theme_helpers() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert!(Theme::Dark.is_dark());
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Theme::Dark);
        assert_eq!(Theme::Light.to_string(), "light");
    }
}
