//! The configurable product type

use std::collections::BTreeMap;
use std::fmt;

/// A product template with a fixed SKU and mutable configuration
///
/// Attributes are kept in a `BTreeMap`, so iteration and rendering are
/// ordered by attribute key.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurableProduct {
    sku: String,
    name: String,
    price: f64,
    attributes: BTreeMap<String, String>,
}

impl ConfigurableProduct {
    /// Create a product with no attributes
    pub fn new(sku: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            price,
            attributes: BTreeMap::new(),
        }
    }

    /// Add an attribute, replacing any previous value for the key
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Look up a single attribute value
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(|v| v.as_str())
    }

    /// Iterate attributes in key order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    /// Human-readable rendering of every field and attribute
    ///
    /// The price is rounded to two decimal places.
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConfigurableProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Product: {} (SKU: {})", self.name, self.sku)?;
        writeln!(f, "Price: {:.2}", self.price)?;
        if self.attributes.is_empty() {
            return write!(f, "Attributes: (none)");
        }
        write!(f, "Attributes:")?;
        for (key, value) in &self.attributes {
            write!(f, "\n  {}: {}", key, value)?;
        }
        Ok(())
    }
}
