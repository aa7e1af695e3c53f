//! Configurable products that serve as registry prototypes
//!
//! A product carries a fixed SKU, a display name, a price, and a set of
//! free-form string attributes. Cloning a product copies the attribute map,
//! so a clone can be reconfigured without touching its source.

mod configurable;

pub use configurable::ConfigurableProduct;
