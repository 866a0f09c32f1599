//! # Item Repository
//!
//! Database operations for items. Every item references an inventory by id;
//! SQLite enforces the reference through a foreign key.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use household_core::{Item, NewItem};

/// Repository for item database operations.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Inserts a new item and returns its database id.
    ///
    /// ## Returns
    /// * `Ok(id)` - Row stored
    /// * `Err(DbError::ForeignKeyViolation)` - Inventory doesn't exist
    pub async fn insert(&self, item: &NewItem) -> DbResult<i64> {
        debug!(
            inventory_id = item.inventory_id,
            label = %item.label,
            count = item.count,
            "Inserting item"
        );

        let result = sqlx::query(
            r#"
            INSERT INTO items (inventory_id, label, count)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(item.inventory_id)
        .bind(&item.label)
        .bind(item.count)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Lists the items of one inventory, oldest first.
    pub async fn list_for_inventory(&self, inventory_id: i64) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, inventory_id, label, count
            FROM items
            WHERE inventory_id = ?1
            ORDER BY id
            "#,
        )
        .bind(inventory_id)
        .fetch_all(&self.pool)
        .await?;

        debug!(inventory_id, count = items.len(), "Listed items");
        Ok(items)
    }

    /// Counts the items of one inventory.
    pub async fn count_for_inventory(&self, inventory_id: i64) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items WHERE inventory_id = ?1")
            .bind(inventory_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
