//! # Business Logic
//!
//! The contract the menu controller calls, and its SQLite-backed
//! implementation.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  create_new_inventory(name, description, created_on) -> Option<id>     │
//! │      Some(id), id != 0  → created                                      │
//! │      None / Some(0)     → not created                                  │
//! │                                                                         │
//! │  get_all_inventories()            -> Vec<Inventory>                    │
//! │  get_items_for_inventory_id(id)   -> Vec<Item>  (empty if unknown)     │
//! │                                                                         │
//! │  create_new_item(inventory_id, label, count) -> Option<ItemRejection>  │
//! │      None               → created   (absence means success)            │
//! │      Some(rejection)    → not created                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Item creation signals success by returning *nothing*, the opposite of
//! inventory creation. Callers depend on that, so it stays.

use chrono::NaiveDate;
use thiserror::Error;
use tokio::runtime::Runtime;
use tracing::{debug, info, warn};

use household_core::{CoreError, Inventory, Item, NewInventory, NewItem, ValidationError};
use household_db::{Database, DbConfig, DbResult};

use crate::error::AppResult;

/// Why an item was not stored.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemRejection {
    /// The inventory id doesn't exist.
    #[error("inventory {0} does not exist")]
    UnknownInventory(i64),

    /// The label or count broke a validation rule.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Operations the menu controller needs from the business layer.
pub trait BusinessLogic {
    /// Stores a new inventory and returns its id.
    fn create_new_inventory(
        &mut self,
        name: &str,
        description: &str,
        created_on: NaiveDate,
    ) -> AppResult<Option<i64>>;

    /// Every stored inventory.
    fn get_all_inventories(&mut self) -> AppResult<Vec<Inventory>>;

    /// The items of one inventory. Unknown ids have no items.
    fn get_items_for_inventory_id(&mut self, inventory_id: i64) -> AppResult<Vec<Item>>;

    /// Stores a new item. `None` means it was stored.
    fn create_new_item(
        &mut self,
        inventory_id: i64,
        label: &str,
        count: i64,
    ) -> AppResult<Option<ItemRejection>>;
}

// =============================================================================
// SQLite implementation
// =============================================================================

/// [`BusinessLogic`] over the SQLite database.
///
/// Owns a current-thread tokio runtime and blocks on each call, so the
/// controller stays synchronous.
#[derive(Debug)]
pub struct SqliteBusinessLogic {
    // Declared before the runtime so the pool is dropped first.
    db: Database,
    runtime: Runtime,
}

impl SqliteBusinessLogic {
    /// Opens (and migrates) the database described by `config`.
    pub fn open(config: DbConfig) -> AppResult<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let db = runtime.block_on(Database::new(config))?;
        info!("Business logic ready");

        Ok(SqliteBusinessLogic { db, runtime })
    }

    /// The underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Closes the connection pool.
    pub fn close(self) {
        self.runtime.block_on(self.db.close());
    }
}

impl BusinessLogic for SqliteBusinessLogic {
    fn create_new_inventory(
        &mut self,
        name: &str,
        description: &str,
        created_on: NaiveDate,
    ) -> AppResult<Option<i64>> {
        let inventory = NewInventory::new(name, description, created_on).map_err(CoreError::from)?;

        let id = self
            .runtime
            .block_on(self.db.inventories().insert(&inventory))?;

        info!(?id, name = %inventory.name, "Inventory created");
        Ok(id)
    }

    fn get_all_inventories(&mut self) -> AppResult<Vec<Inventory>> {
        let inventories = self.runtime.block_on(self.db.inventories().list_all())?;
        Ok(inventories)
    }

    fn get_items_for_inventory_id(&mut self, inventory_id: i64) -> AppResult<Vec<Item>> {
        let items = self
            .runtime
            .block_on(self.db.items().list_for_inventory(inventory_id))?;
        debug!(inventory_id, count = items.len(), "Items fetched");
        Ok(items)
    }

    fn create_new_item(
        &mut self,
        inventory_id: i64,
        label: &str,
        count: i64,
    ) -> AppResult<Option<ItemRejection>> {
        let item = match NewItem::new(inventory_id, label, count) {
            Ok(item) => item,
            Err(e) => {
                warn!(inventory_id, error = %e, "Item rejected by validation");
                return Ok(Some(ItemRejection::Invalid(e)));
            }
        };

        let db = &self.db;
        let stored: DbResult<Option<i64>> = self.runtime.block_on(async {
            if !db.inventories().exists(inventory_id).await? {
                return Ok(None);
            }
            db.items().insert(&item).await.map(Some)
        });

        match stored? {
            Some(id) => {
                debug!(id, inventory_id, "Item created");
                Ok(None)
            }
            None => {
                warn!(inventory_id, "Item rejected: unknown inventory");
                Ok(Some(ItemRejection::UnknownInventory(inventory_id)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn logic() -> SqliteBusinessLogic {
        SqliteBusinessLogic::open(DbConfig::in_memory()).unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_create_and_list_inventories() {
        let mut logic = logic();

        let id = logic
            .create_new_inventory("Pantry", "Kitchen shelf", day())
            .unwrap()
            .unwrap();
        assert!(id > 0);

        let all = logic.get_all_inventories().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].name, "pantry");
        assert_eq!(all[0].created_on, day());
    }

    #[test]
    fn test_blank_inventory_name_is_validation_error() {
        let mut logic = logic();

        let err = logic.create_new_inventory("  ", "x", day()).unwrap_err();
        assert!(matches!(err, AppError::Core(CoreError::Validation(_))));
        assert!(logic.get_all_inventories().unwrap().is_empty());
    }

    #[test]
    fn test_item_creation_returns_none_on_success() {
        let mut logic = logic();
        let id = logic
            .create_new_inventory("Garage", "Tools", day())
            .unwrap()
            .unwrap();

        // Absence of a result is the success signal.
        assert_eq!(logic.create_new_item(id, "Hammer", 1).unwrap(), None);

        let items = logic.get_items_for_inventory_id(id).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "Hammer");
        assert_eq!(items[0].count, 1);
        assert_eq!(items[0].inventory_id, id);
    }

    #[test]
    fn test_item_for_unknown_inventory_is_rejected() {
        let mut logic = logic();

        assert_eq!(
            logic.create_new_item(99, "Ghost", 1).unwrap(),
            Some(ItemRejection::UnknownInventory(99))
        );
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let mut logic = logic();
        let id = logic
            .create_new_inventory("Attic", "", day())
            .unwrap()
            .unwrap();

        let rejection = logic.create_new_item(id, "Boxes", -2).unwrap();
        assert!(matches!(rejection, Some(ItemRejection::Invalid(_))));
        assert!(logic.get_items_for_inventory_id(id).unwrap().is_empty());
    }

    #[test]
    fn test_items_for_unknown_inventory_is_empty() {
        let mut logic = logic();
        logic
            .create_new_inventory("Pantry", "", day())
            .unwrap()
            .unwrap();

        assert!(logic.get_items_for_inventory_id(5).unwrap().is_empty());
    }
}
