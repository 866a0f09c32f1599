//! # Domain Types
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐          ┌─────────────────────┐              │
//! │  │     Inventory       │ 1      * │        Item         │              │
//! │  │  ─────────────────  │◄─────────│  ─────────────────  │              │
//! │  │  id (i64)           │          │  id (i64)           │              │
//! │  │  name (lower case)  │          │  inventory_id (FK)  │              │
//! │  │  description        │          │  label              │              │
//! │  │  created_on (date)  │          │  count              │              │
//! │  └─────────────────────┘          └─────────────────────┘              │
//! │                                                                         │
//! │  NewInventory / NewItem: validated insert forms, no id yet              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids are integers assigned by the database. Neither entity is ever
//! updated or deleted once stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::{
    normalize_inventory_name, validate_description, validate_item_count, validate_item_label,
};

// =============================================================================
// Inventory
// =============================================================================

/// A named collection of household items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Inventory {
    /// Database-assigned identifier.
    pub id: i64,

    /// Lower-cased display name.
    pub name: String,

    /// Free-text description.
    pub description: String,

    /// Day the inventory was created.
    pub created_on: NaiveDate,
}

/// An inventory that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInventory {
    pub name: String,
    pub description: String,
    pub created_on: NaiveDate,
}

impl NewInventory {
    /// Builds a validated insert form.
    ///
    /// The name is trimmed and lower-cased; the description is trimmed.
    pub fn new(
        name: &str,
        description: &str,
        created_on: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let name = normalize_inventory_name(name)?;
        let description = description.trim();
        validate_description(description)?;

        Ok(NewInventory {
            name,
            description: description.to_string(),
            created_on,
        })
    }
}

// =============================================================================
// Item
// =============================================================================

/// A labelled quantity belonging to one inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Item {
    /// Database-assigned identifier.
    pub id: i64,

    /// Owning inventory (foreign key, not ownership).
    pub inventory_id: i64,

    /// What the item is, as the operator typed it.
    pub label: String,

    /// Quantity on hand.
    pub count: i64,
}

/// An item that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub inventory_id: i64,
    pub label: String,
    pub count: i64,
}

impl NewItem {
    /// Builds a validated insert form.
    pub fn new(inventory_id: i64, label: &str, count: i64) -> Result<Self, ValidationError> {
        validate_item_label(label)?;
        validate_item_count(count)?;

        Ok(NewItem {
            inventory_id,
            label: label.to_string(),
            count,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
