//! Stock bookkeeping for the vending machine.

use super::product::Product;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

/// One tracked product and how many units remain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    product: Product,
    quantity: u32,
}

impl StockEntry {
    /// Returns the tracked product.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Returns the remaining quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Mapping from product id to stock entry.
///
/// One entry per distinct product id; quantities are unsigned and only
/// ever decremented by one on a successful dispense.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    stock: HashMap<String, StockEntry>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `product`.
    ///
    /// If the product id is already tracked, the existing quantity is
    /// incremented; otherwise a new entry is inserted. Restock arithmetic
    /// saturates at `u32::MAX` rather than wrapping.
    pub fn add_product(&mut self, product: Product, quantity: u32) {
        match self.stock.entry(product.id().to_string()) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                entry.quantity = entry.quantity.saturating_add(quantity);
                debug!(id = %entry.product.id(), quantity = entry.quantity, "restocked");
            }
            Entry::Vacant(vacant) => {
                debug!(id = %product.id(), quantity, "stocked new product");
                vacant.insert(StockEntry { product, quantity });
            }
        }
    }

    /// Returns true if the id is tracked and at least one unit remains.
    pub fn is_available(&self, product_id: &str) -> bool {
        self.stock
            .get(product_id)
            .is_some_and(|entry| entry.quantity > 0)
    }

    /// Takes one unit of the given product out of stock.
    ///
    /// Returns the product if a unit was available, `None` otherwise.
    /// An untracked id is not an error, just `None`.
    pub fn remove_product(&mut self, product_id: &str) -> Option<Product> {
        if !self.is_available(product_id) {
            return None;
        }
        let entry = self.stock.get_mut(product_id)?;
        entry.quantity -= 1;
        Some(entry.product.clone())
    }

    /// Returns the remaining quantity for an id (0 when untracked).
    pub fn quantity(&self, product_id: &str) -> u32 {
        self.stock.get(product_id).map_or(0, StockEntry::quantity)
    }

    /// Returns all stock entries.
    pub fn entries(&self) -> impl Iterator<Item = &StockEntry> {
        self.stock.values()
    }
}
