//! # Inventory Repository
//!
//! Database operations for inventories.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use household_core::{Inventory, NewInventory};

/// Repository for inventory database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = InventoryRepository::new(pool);
///
/// let id = repo.insert(&new_inventory).await?;
/// let all = repo.list_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    pool: SqlitePool,
}

impl InventoryRepository {
    /// Creates a new InventoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InventoryRepository { pool }
    }

    /// Inserts a new inventory and returns its database id.
    ///
    /// ## Returns
    /// * `Ok(Some(id))` - Row stored
    /// * `Ok(None)` - SQLite stored nothing and returned no row
    pub async fn insert(&self, inventory: &NewInventory) -> DbResult<Option<i64>> {
        debug!(name = %inventory.name, "Inserting inventory");

        let id: Option<i64> = sqlx::query_scalar(
            r#"
            INSERT INTO inventories (name, description, created_on)
            VALUES (?1, ?2, ?3)
            RETURNING id
            "#,
        )
        .bind(&inventory.name)
        .bind(&inventory.description)
        .bind(inventory.created_on)
        .fetch_optional(&self.pool)
        .await?;

        debug!(?id, "Inventory inserted");
        Ok(id)
    }

    /// Lists every inventory, oldest first.
    pub async fn list_all(&self) -> DbResult<Vec<Inventory>> {
        let inventories = sqlx::query_as::<_, Inventory>(
            r#"
            SELECT id, name, description, created_on
            FROM inventories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = inventories.len(), "Listed inventories");
        Ok(inventories)
    }

    /// Gets an inventory by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Inventory))` - Inventory found
    /// * `Ok(None)` - Inventory not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Inventory>> {
        let inventory = sqlx::query_as::<_, Inventory>(
            r#"
            SELECT id, name, description, created_on
            FROM inventories
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(inventory)
    }

    /// Checks whether an inventory with this id exists.
    pub async fn exists(&self, id: i64) -> DbResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM inventories WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }

    /// Counts stored inventories.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventories")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig, DbError};
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    async fn repo() -> (Database, InventoryRepository) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.inventories();
        (db, repo)
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let (_db, repo) = repo().await;

        let pantry = NewInventory::new("Pantry", "Kitchen shelf", day()).unwrap();
        let garage = NewInventory::new("Garage", "Tools", day()).unwrap();

        let first = repo.insert(&pantry).await.unwrap().unwrap();
        let second = repo.insert(&garage).await.unwrap().unwrap();

        assert!(first > 0);
        assert!(second > first);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_list_all_returns_stored_fields() {
        let (_db, repo) = repo().await;

        let pantry = NewInventory::new("Pantry", "Kitchen shelf", day()).unwrap();
        let id = repo.insert(&pantry).await.unwrap().unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(
            all,
            vec![Inventory {
                id,
                name: "pantry".to_string(),
                description: "Kitchen shelf".to_string(),
                created_on: day(),
            }]
        );
    }

    #[tokio::test]
    async fn test_get_by_id_and_exists() {
        let (_db, repo) = repo().await;

        let id = repo
            .insert(&NewInventory::new("Attic", "", day()).unwrap())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(repo.get_by_id(id).await.unwrap().unwrap().name, "attic");
        assert!(repo.get_by_id(id + 100).await.unwrap().is_none());
        assert!(repo.exists(id).await.unwrap());
        assert!(!repo.exists(id + 100).await.unwrap());
    }

    #[tokio::test]
    async fn test_blank_name_hits_check_constraint() {
        let (_db, repo) = repo().await;

        // Bypass NewInventory::new to reach the schema constraint.
        let blank = NewInventory {
            name: "   ".to_string(),
            description: String::new(),
            created_on: day(),
        };

        let err = repo.insert(&blank).await.unwrap_err();
        assert!(matches!(err, DbError::CheckViolation { .. }));
    }
}
