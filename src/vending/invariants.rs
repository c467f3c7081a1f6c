//! Named session invariants, checked in debug builds.

use super::machine::VendingMachine;
use super::state::MachineState;

/// A property that must hold for a value of type `T`.
pub trait Invariant<T> {
    /// Checks whether the invariant holds.
    fn holds(subject: &T) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Invariant: a product is selected only while money is inserted.
///
/// The selection is recorded after payment and cleared with it, so
/// `selected_product` being `Some` implies `inserted_money > 0`.
pub struct SessionConsistentInvariant;

impl Invariant<VendingMachine> for SessionConsistentInvariant {
    fn holds(machine: &VendingMachine) -> bool {
        machine.selected_product().is_none() || machine.inserted_money() > 0
    }

    fn description() -> &'static str {
        "A product is selected only while money is inserted"
    }
}

/// Invariant: an idle machine carries no session data.
///
/// Returning to `Idle`, whether after a dispense or a forced recovery,
/// resets both session fields.
pub struct IdleSessionClearInvariant;

impl Invariant<VendingMachine> for IdleSessionClearInvariant {
    fn holds(machine: &VendingMachine) -> bool {
        machine.state() != MachineState::Idle
            || (machine.inserted_money() == 0 && machine.selected_product().is_none())
    }

    fn description() -> &'static str {
        "An idle machine has zero inserted money and no selection"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vending::Product;

    #[test]
    fn test_fresh_machine_holds() {
        let machine = VendingMachine::new();
        assert!(SessionConsistentInvariant::holds(&machine));
        assert!(IdleSessionClearInvariant::holds(&machine));
    }

    #[test]
    fn test_mid_session_holds() {
        let mut machine = VendingMachine::new();
        machine
            .inventory_mut()
            .add_product(Product::new("1", "Coke", 25), 1);

        machine.insert_coin(25);
        assert!(SessionConsistentInvariant::holds(&machine));

        machine.select_product("1");
        assert!(SessionConsistentInvariant::holds(&machine));
        assert!(machine.inserted_money() > 0);
    }

    #[test]
    fn test_post_dispense_holds() {
        let mut machine = VendingMachine::new();
        machine
            .inventory_mut()
            .add_product(Product::new("1", "Coke", 25), 1);

        machine.insert_coin(25);
        machine.select_product("1");
        machine.press_button();
        machine.dispense_item();

        assert_eq!(machine.state(), MachineState::Idle);
        assert!(IdleSessionClearInvariant::holds(&machine));
    }
}
