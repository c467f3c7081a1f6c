//! Advisory diagnostics for rejected operations.
//!
//! Every state rejects the operations outside its designated transition
//! with one of these messages. Diagnostics are non-fatal and advisory:
//! they are emitted through `tracing`, never returned as errors, and the
//! machine stays in a same-or-safe state.

/// Human-readable message accompanying a rejected or failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Diagnostic {
    /// Tendered amount failed validation.
    #[display("Invalid coin amount.")]
    InvalidAmount,

    /// Selection or button press attempted with no coin inserted.
    #[display("Insert a coin first.")]
    InsertCoinFirst,

    /// Button press or dispense attempted before the session started.
    #[display("Insert a coin and select a product first.")]
    InsertAndSelectFirst,

    /// Second coin offered during an active session.
    #[display("Coin already inserted. Select a product.")]
    CoinAlreadyInserted,

    /// Selected id is untracked or out of stock.
    #[display("Product not available.")]
    ProductNotAvailable,

    /// Button press attempted before selecting.
    #[display("Select a product first.")]
    SelectProductFirst,

    /// Dispense attempted before selecting and confirming.
    #[display("Select a product and press the button.")]
    SelectAndPressButton,

    /// Coin offered after payment was recorded.
    #[display("Payment already made. Press the button to dispense.")]
    PaymentAlreadyMade,

    /// Selection attempted after a product was chosen.
    #[display("Product already selected. Press the button.")]
    ProductAlreadySelected,

    /// Dispense attempted before pressing the button.
    #[display("Press the button to confirm.")]
    PressButtonToConfirm,

    /// Coin offered while the machine is dispensing.
    #[display("Dispensing in progress. Please wait.")]
    DispenseInProgress,

    /// Selection attempted while the machine is dispensing.
    #[display("Cannot select a product while dispensing.")]
    SelectWhileDispensing,

    /// Button pressed while the machine is dispensing.
    #[display("Product is being dispensed.")]
    ProductBeingDispensed,

    /// Selected product vanished between selection and dispense.
    #[display("Error dispensing product.")]
    DispenseError,
}
