//! # household-core: Pure Domain Logic for Household Inventory
//!
//! Domain types, error types and validation rules shared by the database
//! layer and the console application. Nothing in here touches the console,
//! the file system or the database.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Household Inventory Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Console Controller (apps/console)              │   │
//! │  │   menu ──► new/list/select inventory ──► list/add items        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ BusinessLogic trait                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ household-core (THIS CRATE) ★                      │   │
//! │  │   types: Inventory, Item, NewInventory, NewItem                │   │
//! │  │   validation: names, labels, counts                            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                household-db (Database Layer)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Inventory, Item and their insert forms)
//! - [`error`] - Domain error types
//! - [`validation`] - Input rules
//!
//! ## Example Usage
//!
//! ```rust
//! use household_core::NewInventory;
//! use chrono::NaiveDate;
//!
//! let created_on = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let inventory = NewInventory::new("  Garage ", "Tools and paint", created_on).unwrap();
//!
//! assert_eq!(inventory.name, "garage");
//! ```

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

/// Maximum length of an inventory name, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of an inventory description or an item label, in characters.
pub const MAX_TEXT_LEN: usize = 500;
