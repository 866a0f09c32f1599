//! # Household Console Library
//!
//! Core library for the household inventory console application.
//! `main.rs` only calls [`run`]; everything else lives here so it can be
//! tested against scripted input.
//!
//! ## Module Organization
//! ```text
//! household_console/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── Environment-driven settings
//! ├── console.rs      ◄─── Prompts over stdin/stdout
//! ├── controller.rs   ◄─── Menu loop, session state, handlers
//! ├── service.rs      ◄─── BusinessLogic contract + SQLite facade
//! ├── table.rs        ◄─── Boxed table rendering
//! └── error.rs        ◄─── AppError
//! ```

pub mod config;
pub mod console;
pub mod controller;
pub mod error;
pub mod service;
pub mod table;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use household_db::DbConfig;

pub use config::AppConfig;
pub use console::Console;
pub use controller::{InventoryApp, MenuChoice, MenuState, Session};
pub use error::{AppError, AppResult};
pub use service::{BusinessLogic, ItemRejection, SqliteBusinessLogic};

/// Runs the console application until the operator exits.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN, household crates at INFO; RUST_LOG overrides      │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • HOUSEHOLD_* environment variables                                 │
/// │     • Database path from the platform data directory                    │
/// │                                                                         │
/// │  3. Open Database ────────────────────────────────────────────────────► │
/// │     • SQLite with WAL mode, foreign keys on                             │
/// │     • Run pending migrations                                            │
/// │                                                                         │
/// │  4. Run Menu Loop ────────────────────────────────────────────────────► │
/// │     • stdin / stdout                                                    │
/// │     • Returns when "6" is chosen or input ends                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    init_tracing();

    info!("Starting Household Inventory");

    let config = AppConfig::from_env();
    let db_path = config.resolve_database_path()?;
    info!(?db_path, "Database path determined");

    let business_logic = SqliteBusinessLogic::open(DbConfig::new(db_path))?;
    info!("Database connected and migrations applied");

    let stdin = io::stdin();
    let console =
        Console::new(stdin.lock(), io::stdout()).with_screen_clearing(config.clear_screen);

    let mut app = InventoryApp::new(business_logic, console).with_debug_echo(config.debug_echo);
    let result = app.start_application();

    app.into_business_logic().close();
    result
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the menu on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=household=trace` - Show trace for household crates only
/// - Default: WARN, INFO for household crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,household=info,sqlx=warn"));

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
