mod diagnostics;
mod inventory;
mod invariants;
mod machine;
mod payment;
mod product;
mod session;
mod state;

pub use diagnostics::Diagnostic;
pub use inventory::{Inventory, StockEntry};
pub use invariants::{IdleSessionClearInvariant, Invariant, SessionConsistentInvariant};
pub use machine::VendingMachine;
pub use payment::validate_amount;
pub use product::Product;
pub use session::Session;
pub use state::MachineState;
