//! Mutex-guarded registry handle for concurrent hosts

use std::sync::{Arc, Mutex, MutexGuard};

use super::PrototypeRegistry;
use crate::error::RegistryError;
use crate::prototype::Prototype;

/// A cloneable handle to a registry behind a single mutex
///
/// Every operation holds the lock for its whole duration. Clones of the
/// handle share the same underlying registry.
#[derive(Debug)]
pub struct SharedRegistry<T> {
    inner: Arc<Mutex<PrototypeRegistry<T>>>,
}

impl<T> Clone for SharedRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedRegistry<T> {
    fn default() -> Self {
        Self::from_registry(PrototypeRegistry::default())
    }
}

impl<T> From<PrototypeRegistry<T>> for SharedRegistry<T> {
    fn from(registry: PrototypeRegistry<T>) -> Self {
        Self::from_registry(registry)
    }
}

impl<T> SharedRegistry<T> {
    fn from_registry(registry: PrototypeRegistry<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    // add/get never leave the map half-updated, so a poisoned lock is still usable
    fn lock(&self) -> MutexGuard<'_, PrototypeRegistry<T>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains(key)
    }

    /// All registered keys, sorted
    pub fn keys(&self) -> Vec<String> {
        self.lock().keys().into_iter().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn remove(&self, key: &str) -> Option<T> {
        self.lock().remove(key)
    }
}

impl<T: Prototype> SharedRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `prototype` under `key`, returning any replaced prototype
    pub fn add(&self, key: impl Into<String>, prototype: T) -> Option<T> {
        self.lock().add(key, prototype)
    }

    /// Get an independent copy of the prototype registered under `key`
    pub fn get(&self, key: &str) -> Result<T, RegistryError> {
        self.lock().get(key)
    }
}
