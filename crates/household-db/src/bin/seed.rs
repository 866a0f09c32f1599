//! # Seed Data Generator
//!
//! Populates the database with sample household inventories for development.
//!
//! ## Usage
//! ```bash
//! # Seed every sample room (default)
//! cargo run -p household-db --bin seed
//!
//! # Only the first N rooms
//! cargo run -p household-db --bin seed -- --count 2
//!
//! # Specify database path
//! cargo run -p household-db --bin seed -- --db ./data/household.db
//! ```
//!
//! Each room becomes one inventory (lower-cased name, description, today's
//! date) with a handful of stocked items.

use chrono::Local;
use std::env;
use household_core::{NewInventory, NewItem};
use household_db::{Database, DbConfig};

/// Sample rooms: (name, description, items with counts)
const ROOMS: &[(&str, &str, &[(&str, i64)])] = &[
    (
        "Pantry",
        "Kitchen shelf and cupboards",
        &[
            ("Flour", 2),
            ("Sugar", 1),
            ("Rice", 3),
            ("Canned Tomatoes", 6),
            ("Olive Oil", 1),
            ("Pasta", 4),
        ],
    ),
    (
        "Garage",
        "Tools and outdoor equipment",
        &[
            ("Hammer", 1),
            ("Screwdriver Set", 1),
            ("Extension Cord", 2),
            ("Paint Can", 3),
            ("Garden Hose", 1),
        ],
    ),
    (
        "Linen Closet",
        "Hallway closet",
        &[
            ("Bath Towel", 8),
            ("Hand Towel", 6),
            ("Bed Sheet Set", 4),
            ("Pillowcase", 10),
        ],
    ),
    (
        "Bathroom",
        "Under-sink cabinet",
        &[
            ("Toilet Paper", 12),
            ("Toothpaste", 2),
            ("Shampoo", 1),
            ("Soap Bar", 5),
        ],
    ),
    (
        "Freezer",
        "Basement chest freezer",
        &[
            ("Frozen Peas", 3),
            ("Ice Cream", 2),
            ("Chicken Breast", 6),
        ],
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = ROOMS.len();
    let mut db_path = String::from("./household_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(ROOMS.len());
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Household Inventory Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  -c, --count <N>    Number of inventories to create (default: {}, max: {})",
                    ROOMS.len(),
                    ROOMS.len()
                );
                println!("  -d, --db <PATH>    Database file path (default: ./household_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let count = count.min(ROOMS.len());

    println!("Household Inventory Seed Data Generator");
    println!("=======================================");
    println!("Database:    {}", db_path);
    println!("Inventories: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.inventories().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} inventories", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let today = Local::now().date_naive();
    let mut items_added = 0;

    for (name, description, items) in ROOMS.iter().take(count) {
        let inventory = NewInventory::new(name, description, today)?;
        let Some(inventory_id) = db.inventories().insert(&inventory).await? else {
            eprintln!("Failed to insert inventory {}", name);
            continue;
        };

        for (label, quantity) in items.iter() {
            let item = NewItem::new(inventory_id, label, *quantity)?;
            if let Err(e) = db.items().insert(&item).await {
                eprintln!("Failed to insert {} into {}: {}", label, name, e);
                continue;
            }
            items_added += 1;
        }

        println!("  {} (ID {}): {} items", inventory.name, inventory_id, items.len());
    }

    println!();
    println!("✓ Created {} inventories with {} items", count, items_added);

    db.close().await;
    Ok(())
}
