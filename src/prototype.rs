//! The copy capability a registry needs from the values it stores
//!
//! A prototype must be able to produce an instance that shares no mutable
//! storage with itself. In Rust that is exactly what an owned `Clone`
//! provides, so every `Clone` type is a prototype. Types holding shared
//! handles (`Rc`, `Arc`) must give `Clone` deep-copy semantics before they
//! are stored in a registry.

/// A value that can hand out independent copies of itself
pub trait Prototype {
    /// Produce a new instance with equal state and no shared mutable storage
    fn duplicate(&self) -> Self;
}

impl<T: Clone> Prototype for T {
    fn duplicate(&self) -> Self {
        self.clone()
    }
}
