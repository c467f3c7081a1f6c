//! Transient purchase session data.

use serde::{Deserialize, Serialize};

/// Session fields for one insert → select → press → dispense cycle.
///
/// Invariant: `selected_product` is `Some` only while `inserted_money`
/// is positive. Returning to idle resets both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub(super) inserted_money: i64,
    pub(super) selected_product: Option<String>,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the amount inserted this session.
    pub fn inserted_money(&self) -> i64 {
        self.inserted_money
    }

    /// Returns the selected product id, if any.
    pub fn selected_product(&self) -> Option<&str> {
        self.selected_product.as_deref()
    }

    /// Clears the session back to its initial state.
    pub(super) fn reset(&mut self) {
        self.inserted_money = 0;
        self.selected_product = None;
    }
}
