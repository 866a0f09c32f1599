//! # Application Error Type
//!
//! Unified error type for the console application.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  Menu choice "4"                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler (list_inventory_items)                                  │  │
//! │  │  Result<(), AppError>                                            │  │
//! │  │         │                                                        │  │
//! │  │  Bad number?     ─── AppError::InvalidNumber ──┐                │  │
//! │  │  Database error? ─── AppError::Db ─────────────┤                │  │
//! │  │  Validation?     ─── AppError::Core ───────────┤                │  │
//! │  └────────────────────────────────────────────────┼─────────────────┘  │
//! │                                                   ▼                     │
//! │  Recovery boundary prints                                              │
//! │  "Exception in list_inventory_items() method: <message>"               │
//! │  and returns to the menu.                                              │
//! │                                                                         │
//! │  AppError::InputClosed is the only variant that ends the session.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::num::ParseIntError;

use household_core::{CoreError, ValidationError};
use household_db::DbError;
use thiserror::Error;

/// Errors raised by the console application.
#[derive(Debug, Error)]
pub enum AppError {
    /// Persistence failed.
    #[error(transparent)]
    Db(#[from] DbError),

    /// A domain rule was broken.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The operator typed something that isn't an integer.
    #[error("invalid integer '{input}': {source}")]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// Inventory selection was abandoned or failed.
    #[error("no inventory selected")]
    NoInventorySelected,

    /// The operator's input stream reached end of file.
    #[error("input stream closed")]
    InputClosed,

    /// Configuration could not be resolved.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(CoreError::from(err))
    }
}

/// Result type for console operations.
pub type AppResult<T> = Result<T, AppError>;
