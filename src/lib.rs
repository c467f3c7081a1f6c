//! Strictly Vending library - a type-safe vending machine.
//!
//! The machine is a four-state purchase cycle (idle, coin inserted,
//! button pressed, dispensing) over an in-memory inventory. Each state
//! answers the same four operations; operations outside a state's
//! designated transition are rejected with an advisory diagnostic and
//! leave the machine unchanged.
//!
//! # Example
//!
//! ```
//! use strictly_vending::{Product, VendingMachine};
//!
//! let mut machine = VendingMachine::new();
//! machine.inventory_mut().add_product(Product::new("1", "Coke", 25), 5);
//!
//! machine.insert_coin(25);
//! machine.select_product("1");
//! machine.press_button();
//! let product = machine.dispense_item();
//!
//! assert_eq!(product.map(|p| p.name().to_string()), Some("Coke".to_string()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod vending;

// Crate-level exports - machine and domain types
pub use vending::{
    Diagnostic, IdleSessionClearInvariant, Inventory, Invariant, MachineState, Product, Session,
    SessionConsistentInvariant, StockEntry, VendingMachine, validate_amount,
};
