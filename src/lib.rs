//! Product Prototypes - a keyed registry of cloneable product templates
//!
//! This library stores canonical product templates under string keys and hands
//! out independent copies on request. Callers own every copy they receive and
//! can reconfigure it without affecting the registry or other copies.
//!
//! # Example
//!
//! ```rust
//! use product_prototypes::{ConfigurableProduct, ProductRegistry, RegistryError};
//!
//! let mut registry = ProductRegistry::new();
//! registry.add(
//!     "sku-1",
//!     ConfigurableProduct::new("sku-1", "Mouse", 25.0).with_attribute("color", "black"),
//! );
//!
//! let mut custom = registry.get("sku-1").unwrap();
//! custom.set_attribute("color", "white");
//!
//! assert_eq!(registry.get("sku-1").unwrap().attribute("color"), Some("black"));
//! assert!(matches!(registry.get("sku-9"), Err(RegistryError::KeyNotFound { .. })));
//! ```

pub mod catalog;
pub mod error;
pub mod product;
pub mod prototype;
pub mod registry;

pub use catalog::{Catalog, CatalogError};
pub use error::RegistryError;
pub use product::ConfigurableProduct;
pub use prototype::Prototype;
pub use registry::{ProductRegistry, PrototypeRegistry, SharedRegistry};

use std::path::Path;

/// Build a product registry from catalog TOML source
///
/// # Example
///
/// ```rust
/// use product_prototypes::load_registry;
///
/// let registry = load_registry(r#"
///     [products.sku-1]
///     name = "Mouse"
///     price = 25.0
/// "#).unwrap();
///
/// assert_eq!(registry.get("sku-1").unwrap().name(), "Mouse");
/// ```
pub fn load_registry(source: &str) -> Result<ProductRegistry, CatalogError> {
    Ok(Catalog::from_str(source)?.into_registry())
}

/// Build a product registry from a catalog file
pub fn load_registry_from_file(path: &Path) -> Result<ProductRegistry, CatalogError> {
    Ok(Catalog::from_file(path)?.into_registry())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_registry_simple() {
        let registry = load_registry(
            r#"
            [products.a]
            name = "A"
            price = 1.5

            [products.a.attributes]
            size = "m"
        "#,
        )
        .unwrap();
        let a = registry.get("a").unwrap();
        assert_eq!(a.price(), 1.5);
        assert_eq!(a.attribute("size"), Some("m"));
    }

    #[test]
    fn test_load_registry_parse_error() {
        let result = load_registry("[products.a]\nname = 3");
        assert!(matches!(result, Err(CatalogError::ParseError(_))));
    }

    #[test]
    fn test_load_registry_missing_file() {
        let result = load_registry_from_file(Path::new("/nonexistent/catalog.toml"));
        assert!(matches!(result, Err(CatalogError::IoError(_))));
    }
}
