//! # Household Inventory Entry Point
//!
//! Starts the text-menu application on the current terminal.
//!
//! ```text
//!     stdin ──► InventoryApp ──► SqliteBusinessLogic ──► household.db
//!                   │
//!                   └──► stdout (menu, tables)    stderr (logs)
//! ```
//!
//! Exits with status 0 when the operator chooses "Exit" or input ends,
//! and 1 when startup fails.

fn main() {
    // The actual setup is in lib.rs for testability
    if let Err(e) = household_console::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
