//! Error types for registry lookups

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No prototype is registered under the requested key
    #[error("prototype not found: {key}{}", format_suggestions(.suggestions))]
    KeyNotFound {
        key: String,
        suggestions: Vec<String>,
    },
}

impl RegistryError {
    /// Create a key-not-found error with near-miss suggestions
    pub fn not_found(key: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self::KeyNotFound {
            key: key.into(),
            suggestions,
        }
    }

    /// The key that was looked up
    pub fn key(&self) -> &str {
        match self {
            Self::KeyNotFound { key, .. } => key,
        }
    }

    /// Registered keys that are close to the missing one
    pub fn suggestions(&self) -> &[String] {
        match self {
            Self::KeyNotFound { suggestions, .. } => suggestions,
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}
