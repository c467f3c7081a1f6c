//! The vending machine host object.

use super::inventory::Inventory;
use super::product::Product;
use super::session::Session;
use super::state::MachineState;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A vending machine driving one purchase session at a time.
///
/// The machine owns the current state, the inventory, and the transient
/// session fields. It contains no transition logic of its own: every
/// public operation forwards to the current [`MachineState`] and stores
/// whatever state that returns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendingMachine {
    state: MachineState,
    inventory: Inventory,
    session: Session,
}

impl VendingMachine {
    /// Creates an idle machine with an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a coin of the given amount.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn insert_coin(&mut self, amount: i64) {
        self.state = self.state.insert_coin(&mut self.session, amount);
        self.check_invariants();
    }

    /// Selects a product by id.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn select_product(&mut self, product_id: &str) {
        self.state = self
            .state
            .select_product(&mut self.session, &self.inventory, product_id);
        self.check_invariants();
    }

    /// Presses the confirm button.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn press_button(&mut self) {
        self.state = self.state.press_button();
        self.check_invariants();
    }

    /// Dispenses the selected product, if the session reached that point.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn dispense_item(&mut self) -> Option<Product> {
        let (state, product) = self
            .state
            .dispense_item(&mut self.session, &mut self.inventory);
        self.state = state;
        self.check_invariants();
        product
    }

    /// Returns the current state.
    pub fn state(&self) -> MachineState {
        self.state
    }

    /// Returns the inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Returns the inventory for stocking.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Returns the amount inserted this session.
    pub fn inserted_money(&self) -> i64 {
        self.session.inserted_money()
    }

    /// Returns the product id selected this session, if any.
    pub fn selected_product(&self) -> Option<&str> {
        self.session.selected_product()
    }

    /// Asserts the session invariants in debug builds.
    fn check_invariants(&self) {
        #[cfg(debug_assertions)]
        {
            use super::invariants::{
                IdleSessionClearInvariant, Invariant, SessionConsistentInvariant,
            };
            debug_assert!(
                SessionConsistentInvariant::holds(self),
                "{}",
                SessionConsistentInvariant::description()
            );
            debug_assert!(
                IdleSessionClearInvariant::holds(self),
                "{}",
                IdleSessionClearInvariant::description()
            );
        }
    }
}
