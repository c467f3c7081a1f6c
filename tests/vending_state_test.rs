//! Tests for the purchase-session state machine.

use strictly_vending::{MachineState, Product, VendingMachine};

fn stocked_machine() -> VendingMachine {
    let mut machine = VendingMachine::new();
    machine
        .inventory_mut()
        .add_product(Product::new("1", "Coke", 25), 5);
    machine
        .inventory_mut()
        .add_product(Product::new("2", "Chips", 15), 3);
    machine
}

#[test]
fn test_invalid_amounts_stay_idle() {
    let mut machine = stocked_machine();

    machine.insert_coin(0);
    assert_eq!(machine.state(), MachineState::Idle);

    machine.insert_coin(-25);
    assert_eq!(machine.state(), MachineState::Idle);

    assert_eq!(machine.inserted_money(), 0);
}

#[test]
fn test_valid_coin_starts_session() {
    let mut machine = stocked_machine();

    machine.insert_coin(25);
    assert_eq!(machine.state(), MachineState::CoinInserted);
    assert_eq!(machine.inserted_money(), 25);
}

#[test]
fn test_second_coin_is_noop() {
    let mut machine = stocked_machine();

    machine.insert_coin(25);
    machine.insert_coin(10);

    assert_eq!(machine.state(), MachineState::CoinInserted);
    assert_eq!(machine.inserted_money(), 25);
}

#[test]
fn test_unavailable_selection_rejected() {
    let mut machine = stocked_machine();

    machine.insert_coin(25);
    machine.select_product("99");

    assert_eq!(machine.state(), MachineState::CoinInserted);
    assert_eq!(machine.selected_product(), None);
}

#[test]
fn test_operations_out_of_order_rejected() {
    let mut machine = stocked_machine();

    // Nothing inserted yet - only insert_coin does anything.
    machine.select_product("1");
    assert_eq!(machine.state(), MachineState::Idle);
    machine.press_button();
    assert_eq!(machine.state(), MachineState::Idle);
    assert_eq!(machine.dispense_item(), None);
    assert_eq!(machine.state(), MachineState::Idle);

    // Coin inserted - pressing before selecting is rejected.
    machine.insert_coin(25);
    machine.press_button();
    assert_eq!(machine.state(), MachineState::CoinInserted);
    assert_eq!(machine.dispense_item(), None);
    assert_eq!(machine.state(), MachineState::CoinInserted);

    // Selected - dispensing before pressing is rejected.
    machine.select_product("1");
    assert_eq!(machine.dispense_item(), None);
    assert_eq!(machine.state(), MachineState::ButtonPressed);
}

#[test]
fn test_happy_path_full_cycle() {
    let mut machine = VendingMachine::new();
    machine
        .inventory_mut()
        .add_product(Product::new("1", "Coke", 25), 1);

    machine.insert_coin(25);
    machine.select_product("1");
    machine.press_button();
    let product = machine.dispense_item();

    let product = product.expect("product should be dispensed");
    assert_eq!(product.name(), "Coke");
    assert_eq!(product.price(), 25);

    assert_eq!(machine.inventory().quantity("1"), 0);
    assert_eq!(machine.state(), MachineState::Idle);
    assert_eq!(machine.inserted_money(), 0);
    assert_eq!(machine.selected_product(), None);
}

#[test]
fn test_second_dispense_requires_new_cycle() {
    let mut machine = VendingMachine::new();
    machine
        .inventory_mut()
        .add_product(Product::new("1", "Coke", 25), 1);

    machine.insert_coin(25);
    machine.select_product("1");
    machine.press_button();
    assert!(machine.dispense_item().is_some());

    // Back in Idle: a bare dispense is rejected, nothing changes.
    assert_eq!(machine.state(), MachineState::Idle);
    assert_eq!(machine.dispense_item(), None);
    assert_eq!(machine.state(), MachineState::Idle);

    // The stock is gone, so a fresh session cannot select it either.
    machine.insert_coin(25);
    machine.select_product("1");
    assert_eq!(machine.state(), MachineState::CoinInserted);
}

#[test]
fn test_dispense_error_recovers_to_idle() {
    let mut machine = stocked_machine();

    machine.insert_coin(25);
    machine.select_product("2");
    machine.press_button();

    // Drain the stock between confirmation and hand-over.
    while machine.inventory_mut().remove_product("2").is_some() {}
    assert_eq!(machine.inventory().quantity("2"), 0);

    let product = machine.dispense_item();
    assert_eq!(product, None);

    // Forced recovery: session cleared, machine usable again.
    assert_eq!(machine.state(), MachineState::Idle);
    assert_eq!(machine.inserted_money(), 0);
    assert_eq!(machine.selected_product(), None);

    machine.insert_coin(25);
    assert_eq!(machine.state(), MachineState::CoinInserted);
}

#[test]
fn test_selection_only_after_payment() {
    let mut machine = stocked_machine();

    machine.insert_coin(25);
    machine.select_product("1");

    assert_eq!(machine.selected_product(), Some("1"));
    assert!(machine.inserted_money() > 0);
}
