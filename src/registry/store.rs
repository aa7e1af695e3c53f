//! Prototype registry for storing canonical instances and issuing copies

use std::collections::HashMap;

use tracing::{debug, warn};

use super::find_similar;
use crate::error::RegistryError;
use crate::product::ConfigurableProduct;
use crate::prototype::Prototype;

/// Maximum edit distance for "did you mean" suggestions
const SUGGESTION_DISTANCE: usize = 2;

/// Registry mapping string keys to canonical prototypes
#[derive(Debug)]
pub struct PrototypeRegistry<T> {
    prototypes: HashMap<String, T>,
}

/// Registry of product templates
pub type ProductRegistry = PrototypeRegistry<ConfigurableProduct>;

impl<T> Default for PrototypeRegistry<T> {
    fn default() -> Self {
        Self {
            prototypes: HashMap::new(),
        }
    }
}

impl<T: Prototype> PrototypeRegistry<T> {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `prototype` as the canonical instance for `key`
    ///
    /// The registry takes ownership, so the stored state can only change
    /// through another `add`. A previous prototype under the same key is
    /// replaced and returned.
    pub fn add(&mut self, key: impl Into<String>, prototype: T) -> Option<T> {
        let key = key.into();
        let replaced = self.prototypes.insert(key.clone(), prototype);
        debug!(key = %key, replaced = replaced.is_some(), "registered prototype");
        replaced
    }

    /// Register a copy of a borrowed prototype
    pub fn add_copy(&mut self, key: impl Into<String>, prototype: &T) -> Option<T> {
        self.add(key, T::duplicate(prototype))
    }

    /// Get an independent copy of the prototype registered under `key`
    pub fn get(&self, key: &str) -> Result<T, RegistryError> {
        match self.prototypes.get(key) {
            Some(prototype) => {
                debug!(key, "cloning prototype");
                Ok(T::duplicate(prototype))
            }
            None => {
                let suggestions = find_similar(self.keys_unordered(), key, SUGGESTION_DISTANCE);
                warn!(key, ?suggestions, "prototype not found");
                Err(RegistryError::not_found(key, suggestions))
            }
        }
    }
}

impl<T> PrototypeRegistry<T> {
    /// Read-only view of the canonical instance
    pub fn prototype(&self, key: &str) -> Option<&T> {
        self.prototypes.get(key)
    }

    /// Check if a prototype exists
    pub fn contains(&self, key: &str) -> bool {
        self.prototypes.contains_key(key)
    }

    /// Remove and return the prototype registered under `key`
    pub fn remove(&mut self, key: &str) -> Option<T> {
        let removed = self.prototypes.remove(key);
        if removed.is_some() {
            debug!(key, "removed prototype");
        }
        removed
    }

    /// All registered keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys_unordered().collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    fn keys_unordered(&self) -> impl Iterator<Item = &str> {
        self.prototypes.keys().map(|k| k.as_str())
    }
}
