//! TOML product catalogs
//!
//! A catalog file declares the prototypes a registry starts with. Each
//! `[products.<key>]` table becomes one product whose SKU is the table key.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::product::ConfigurableProduct;
use crate::registry::ProductRegistry;

/// Errors that can occur when loading or parsing catalogs
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse catalog TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid price for product '{sku}': {price}")]
    InvalidPrice { sku: String, price: f64 },
}

/// A named set of product prototypes
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Optional name for the catalog
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Products keyed by SKU
    pub products: BTreeMap<String, ConfigurableProduct>,
}

/// TOML structure for deserializing catalogs
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlCatalog {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    products: BTreeMap<String, TomlProduct>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlProduct {
    name: String,
    price: f64,
    #[serde(default)]
    attributes: BTreeMap<String, String>,
}

/// Built-in demo catalog
const DEFAULT_CATALOG: &str = r#"
[metadata]
name = "Peripherals"
description = "Demo prototypes"

[products.sku-1]
name = "Mouse"
price = 25.0

[products.sku-1.attributes]
color = "black"
connection = "usb"

[products.sku-2]
name = "Keyboard"
price = 49.99

[products.sku-2.attributes]
layout = "us"
switches = "brown"
"#;

impl Catalog {
    /// Load catalog from TOML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_str(&content)?;
        info!(path = %path.display(), products = catalog.products.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Load catalog from TOML string
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let parsed: TomlCatalog = toml::from_str(content)?;

        let products = parsed
            .products
            .into_iter()
            .map(|(sku, entry)| {
                // is_sign_negative also catches -0.0
                if !entry.price.is_finite() || entry.price.is_sign_negative() {
                    return Err(CatalogError::InvalidPrice {
                        sku,
                        price: entry.price,
                    });
                }
                let mut product = ConfigurableProduct::new(sku.clone(), entry.name, entry.price);
                for (key, value) in entry.attributes {
                    product.set_attribute(key, value);
                }
                Ok((sku, product))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Ok(Catalog {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            products,
        })
    }

    /// Register every product under its SKU in a new registry
    pub fn into_registry(self) -> ProductRegistry {
        let mut registry = ProductRegistry::new();
        for (sku, product) in self.products {
            registry.add(sku, product);
        }
        registry
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_str(DEFAULT_CATALOG).expect("Default catalog should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_catalog() {
        let catalog = Catalog::default();
        assert_eq!(catalog.name, Some("Peripherals".to_string()));
        assert!(catalog.products.contains_key("sku-1"));
        assert!(catalog.products.contains_key("sku-2"));
    }

    #[test]
    fn test_default_catalog_products() {
        let catalog = Catalog::default();
        let mouse = &catalog.products["sku-1"];
        assert_eq!(mouse.sku(), "sku-1");
        assert_eq!(mouse.name(), "Mouse");
        assert_eq!(mouse.price(), 25.0);
        assert_eq!(mouse.attribute("color"), Some("black"));
    }

    #[test]
    fn test_parse_toml_without_metadata() {
        let toml_str = r#"
[products.lap]
name = "Laptop"
price = 999.0
"#;
        let catalog = Catalog::from_str(toml_str).expect("Should parse");
        assert_eq!(catalog.name, None);
        assert_eq!(
            catalog.products["lap"],
            ConfigurableProduct::new("lap", "Laptop", 999.0)
        );
    }

    #[test]
    fn test_parse_empty_catalog() {
        let catalog = Catalog::from_str("").expect("Should parse");
        assert!(catalog.products.is_empty());
        assert!(catalog.into_registry().is_empty());
    }

    #[test]
    fn test_negative_price_rejected() {
        let toml_str = r#"
[products.bad]
name = "Bad"
price = -1.0
"#;
        let result = Catalog::from_str(toml_str);
        assert!(matches!(result, Err(CatalogError::InvalidPrice { .. })));
    }

    #[test]
    fn test_unknown_product_field_rejected() {
        let toml_str = r#"
[products.bad]
name = "Bad"
price = 1.0
colour = "red"
"#;
        let result = Catalog::from_str(toml_str);
        assert!(matches!(result, Err(CatalogError::ParseError(_))));
    }

    #[test]
    fn test_misspelled_products_table_rejected() {
        let toml_str = r#"
[product.sku-1]
name = "Mouse"
price = 25.0
"#;
        let result = Catalog::from_str(toml_str);
        assert!(matches!(result, Err(CatalogError::ParseError(_))));
    }

    #[test]
    fn test_unknown_metadata_field_rejected() {
        let toml_str = r#"
[metadata]
title = "Peripherals"
"#;
        let result = Catalog::from_str(toml_str);
        assert!(matches!(result, Err(CatalogError::ParseError(_))));
    }

    #[test]
    fn test_negative_zero_price_rejected() {
        let toml_str = r#"
[products.zero]
name = "Zero"
price = -0.0
"#;
        let result = Catalog::from_str(toml_str);
        assert!(matches!(result, Err(CatalogError::InvalidPrice { .. })));
    }

    #[test]
    fn test_zero_price_accepted() {
        let toml_str = r#"
[products.free]
name = "Sticker"
price = 0.0
"#;
        let catalog = Catalog::from_str(toml_str).expect("Should parse");
        assert_eq!(catalog.products["free"].price(), 0.0);
    }

    #[test]
    fn test_first_invalid_sku_reported() {
        let toml_str = r#"
[products.zeta]
name = "Z"
price = -3.0

[products.alpha]
name = "A"
price = -1.0

[products.mid]
name = "M"
price = -2.0
"#;
        match Catalog::from_str(toml_str) {
            Err(CatalogError::InvalidPrice { sku, price }) => {
                assert_eq!(sku, "alpha");
                assert_eq!(price, -1.0);
            }
            other => panic!("expected InvalidPrice, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = Catalog::from_str(invalid);
        assert!(result.is_err());
    }

    #[test]
    fn test_into_registry() {
        let registry = Catalog::default().into_registry();
        assert_eq!(registry.keys(), vec!["sku-1", "sku-2"]);
        assert_eq!(registry.get("sku-2").unwrap().name(), "Keyboard");
    }
}
