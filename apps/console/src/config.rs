//! # Configuration
//!
//! Settings loaded once at startup. There are no command-line flags; the
//! environment is the only override source.
//!
//! ## Environment Variables
//! - `HOUSEHOLD_DB_PATH`: database file (default: platform data directory)
//! - `HOUSEHOLD_DEBUG_ECHO`: print diagnostic lines such as `You entered: 3`
//! - `HOUSEHOLD_CLEAR_SCREEN`: clear the terminal between screens

use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::warn;

use crate::error::{AppError, AppResult};

const DB_PATH_VAR: &str = "HOUSEHOLD_DB_PATH";
const DEBUG_ECHO_VAR: &str = "HOUSEHOLD_DEBUG_ECHO";
const CLEAR_SCREEN_VAR: &str = "HOUSEHOLD_CLEAR_SCREEN";

/// Database file name inside the data directory.
const DB_FILE_NAME: &str = "household.db";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Explicit database path. `None` uses the platform data directory.
    pub database_path: Option<PathBuf>,

    /// Print diagnostic lines alongside the menu.
    /// Default: true
    pub debug_echo: bool,

    /// Clear the terminal before each screen.
    /// Default: true
    pub clear_screen: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_path: None,
            debug_echo: true,
            clear_screen: true,
        }
    }
}

impl AppConfig {
    /// Creates a config from environment variables and defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates a config from any key/value source.
    ///
    /// Unparseable flag values are ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = AppConfig::default();

        if let Some(path) = lookup(DB_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            config.database_path = Some(PathBuf::from(path));
        }

        if let Some(value) = lookup(DEBUG_ECHO_VAR) {
            match parse_flag(&value) {
                Some(flag) => config.debug_echo = flag,
                None => warn!(var = DEBUG_ECHO_VAR, %value, "Ignoring unrecognised flag value"),
            }
        }

        if let Some(value) = lookup(CLEAR_SCREEN_VAR) {
            match parse_flag(&value) {
                Some(flag) => config.clear_screen = flag,
                None => warn!(var = CLEAR_SCREEN_VAR, %value, "Ignoring unrecognised flag value"),
            }
        }

        config
    }

    /// Determines the database file path.
    ///
    /// ## Platform-Specific Defaults
    /// - **macOS**: `~/Library/Application Support/com.household.inventory/household.db`
    /// - **Windows**: `%APPDATA%\household\inventory\data\household.db`
    /// - **Linux**: `~/.local/share/inventory/household.db`
    ///
    /// The data directory is created if it doesn't exist.
    pub fn resolve_database_path(&self) -> AppResult<PathBuf> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }

        let proj_dirs = ProjectDirs::from("com", "household", "inventory").ok_or_else(|| {
            AppError::Config("could not determine app data directory".to_string())
        })?;

        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join(DB_FILE_NAME))
    }
}

/// Parses a boolean flag value.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, AppConfig::default());
        assert!(config.debug_echo);
        assert!(config.clear_screen);
        assert!(config.database_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (DB_PATH_VAR, "/tmp/house.db"),
            (DEBUG_ECHO_VAR, "off"),
            (CLEAR_SCREEN_VAR, "NO"),
        ]);
        assert_eq!(config.database_path, Some(PathBuf::from("/tmp/house.db")));
        assert!(!config.debug_echo);
        assert!(!config.clear_screen);
    }

    #[test]
    fn test_unrecognised_flag_keeps_default() {
        let config = config_from(&[(DEBUG_ECHO_VAR, "sometimes"), (DB_PATH_VAR, "  ")]);
        assert!(config.debug_echo);
        assert!(config.database_path.is_none());
    }

    #[test]
    fn test_parse_flag() {
        for value in ["1", "true", "YES", " on "] {
            assert_eq!(parse_flag(value), Some(true), "{value}");
        }
        for value in ["0", "False", "no", "OFF"] {
            assert_eq!(parse_flag(value), Some(false), "{value}");
        }
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_explicit_path_is_used_verbatim() {
        let config = config_from(&[(DB_PATH_VAR, "./data/house.db")]);
        assert_eq!(
            config.resolve_database_path().unwrap(),
            PathBuf::from("./data/house.db")
        );
    }
}
