//! # Repository Module
//!
//! Database repository implementations.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SqliteBusinessLogic                                                   │
//! │       │                                                                 │
//! │       │  db.inventories().list_all()                                   │
//! │       ▼                                                                 │
//! │  InventoryRepository            ItemRepository                         │
//! │  ├── insert(&NewInventory)      ├── insert(&NewItem)                   │
//! │  ├── list_all()                 ├── list_for_inventory(id)             │
//! │  ├── get_by_id(id)              └── count_for_inventory(id)            │
//! │  ├── exists(id)                                                        │
//! │  └── count()                                                           │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both entities are append-only, so there are no update or delete paths.

pub mod inventory;
pub mod item;
