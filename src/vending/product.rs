//! Product catalog entry.

use serde::{Deserialize, Serialize};

/// A product the machine can stock and dispense.
///
/// Identity and price are fixed at construction; there is no way to
/// mutate a product once it exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    id: String,
    /// Human-readable name.
    name: String,
    /// Price in the machine's smallest currency unit.
    price: u32,
}

impl Product {
    /// Creates a new product.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }

    /// Returns the product identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the price.
    pub fn price(&self) -> u32 {
        self.price
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (#{}, {})", self.name, self.id, self.price)
    }
}
