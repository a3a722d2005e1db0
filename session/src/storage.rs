//! Single-slot bearer token storage over an injected key-value capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! `TokenStorage` is the only writer of the token slot. Browser builds back it
//! with `localStorage`, `authctl` with a JSON file, and tests with
//! [`MemoryStore`]. Absence of a token is a normal state, not an error.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "auth_token";

/// Minimal persistent key-value capability.
///
/// Implementations swallow backend write failures; callers only ever observe
/// a value or its absence.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// The bearer token slot, bound to [`TOKEN_KEY`].
pub struct TokenStorage {
    store: Box<dyn KeyValueStore>,
}

impl TokenStorage {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self { store: Box::new(store) }
    }

    /// The stored token. Blank values read as absent.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.store
            .get_item(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn set(&self, token: &str) {
        self.store.set_item(TOKEN_KEY, token);
    }

    pub fn clear(&self) {
        self.store.remove_item(TOKEN_KEY);
    }
}

impl std::fmt::Debug for TokenStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStorage")
            .field("present", &self.get().is_some())
            .finish()
    }
}
