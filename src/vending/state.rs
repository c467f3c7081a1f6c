//! Machine states and their transition rules.
//!
//! The purchase session is a four-state cycle:
//!
//! ```text
//! Idle → CoinInserted → ButtonPressed → Dispensing → Idle
//! ```
//!
//! Each state answers the same four operations. The one operation on its
//! designated transition performs it and returns the next state; every
//! other operation warns and returns the state unchanged. Matching on the
//! state enum per operation keeps illegal-operation handling local and
//! exhaustive — the dispatch is the validation layer.

use super::diagnostics::Diagnostic;
use super::inventory::Inventory;
use super::payment;
use super::product::Product;
use super::session::Session;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Phase of the purchase session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum MachineState {
    /// Waiting for a coin; session fields are clear.
    Idle,
    /// Payment recorded, waiting for a product selection.
    CoinInserted,
    /// Selection recorded, waiting for the confirm button.
    ButtonPressed,
    /// Confirmed, waiting to hand over the product.
    Dispensing,
}

impl Default for MachineState {
    fn default() -> Self {
        MachineState::Idle
    }
}

impl MachineState {
    /// Handles a tendered coin.
    ///
    /// Only `Idle` accepts a coin, and only when the amount validates.
    pub(super) fn insert_coin(self, session: &mut Session, amount: i64) -> MachineState {
        match self {
            MachineState::Idle => {
                if payment::validate_amount(amount) {
                    info!(amount, "coin inserted");
                    session.inserted_money = amount;
                    MachineState::CoinInserted
                } else {
                    warn!(amount, "{}", Diagnostic::InvalidAmount);
                    self
                }
            }
            MachineState::CoinInserted => {
                warn!("{}", Diagnostic::CoinAlreadyInserted);
                self
            }
            MachineState::ButtonPressed => {
                warn!("{}", Diagnostic::PaymentAlreadyMade);
                self
            }
            MachineState::Dispensing => {
                warn!("{}", Diagnostic::DispenseInProgress);
                self
            }
        }
    }

    /// Handles a product selection.
    ///
    /// Only `CoinInserted` accepts a selection, and only for an id the
    /// inventory can currently serve.
    pub(super) fn select_product(
        self,
        session: &mut Session,
        inventory: &Inventory,
        product_id: &str,
    ) -> MachineState {
        match self {
            MachineState::Idle => {
                warn!("{}", Diagnostic::InsertCoinFirst);
                self
            }
            MachineState::CoinInserted => {
                if inventory.is_available(product_id) {
                    info!(product_id, "product selected");
                    session.selected_product = Some(product_id.to_string());
                    MachineState::ButtonPressed
                } else {
                    warn!(product_id, "{}", Diagnostic::ProductNotAvailable);
                    self
                }
            }
            MachineState::ButtonPressed => {
                warn!("{}", Diagnostic::ProductAlreadySelected);
                self
            }
            MachineState::Dispensing => {
                warn!("{}", Diagnostic::SelectWhileDispensing);
                self
            }
        }
    }

    /// Handles the confirm button.
    ///
    /// Only `ButtonPressed` moves on; the transition itself is
    /// unconditional once a selection exists.
    pub(super) fn press_button(self) -> MachineState {
        match self {
            MachineState::Idle => {
                warn!("{}", Diagnostic::InsertAndSelectFirst);
                self
            }
            MachineState::CoinInserted => {
                warn!("{}", Diagnostic::SelectProductFirst);
                self
            }
            MachineState::ButtonPressed => {
                info!("button pressed, dispensing");
                MachineState::Dispensing
            }
            MachineState::Dispensing => {
                warn!("{}", Diagnostic::ProductBeingDispensed);
                self
            }
        }
    }

    /// Hands over the selected product.
    ///
    /// Only `Dispensing` dispenses. Whether or not the inventory still
    /// has the product, the session resets and the machine returns to
    /// `Idle` so a failed hand-over cannot wedge the machine.
    pub(super) fn dispense_item(
        self,
        session: &mut Session,
        inventory: &mut Inventory,
    ) -> (MachineState, Option<Product>) {
        match self {
            MachineState::Idle => {
                warn!("{}", Diagnostic::InsertAndSelectFirst);
                (self, None)
            }
            MachineState::CoinInserted => {
                warn!("{}", Diagnostic::SelectAndPressButton);
                (self, None)
            }
            MachineState::ButtonPressed => {
                warn!("{}", Diagnostic::PressButtonToConfirm);
                (self, None)
            }
            MachineState::Dispensing => {
                let product = session
                    .selected_product
                    .as_deref()
                    .and_then(|id| inventory.remove_product(id));
                match &product {
                    Some(product) => info!(%product, "dispensed"),
                    None => warn!("{}", Diagnostic::DispenseError),
                }
                session.reset();
                (MachineState::Idle, product)
            }
        }
    }
}
