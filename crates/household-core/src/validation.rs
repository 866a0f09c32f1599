//! # Validation Module
//!
//! Input rules for inventories and items.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: Console controller                                           │
//! │  └── Empty name → re-prompt, nothing sent downstream                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Business-logic facade                                        │
//! │  └── THIS MODULE: length, emptiness, non-negative counts               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: SQLite                                                       │
//! │  ├── NOT NULL / CHECK constraints                                      │
//! │  └── Foreign key items.inventory_id → inventories.id                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_NAME_LEN, MAX_TEXT_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Trims and lower-cases an inventory name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use household_core::validation::normalize_inventory_name;
///
/// assert_eq!(normalize_inventory_name(" Linen Closet ").unwrap(), "linen closet");
/// assert!(normalize_inventory_name("  ").is_err());
/// ```
pub fn normalize_inventory_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_lowercase())
}

/// Validates an inventory description. Empty is allowed.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_TEXT_LEN,
        });
    }

    Ok(())
}

/// Validates an item label. Empty is allowed.
pub fn validate_item_label(label: &str) -> ValidationResult<()> {
    if label.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: "item".to_string(),
            max: MAX_TEXT_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an item count.
///
/// ## Rules
/// - Must be zero or more (an empty shelf is still worth recording)
pub fn validate_item_count(count: i64) -> ValidationResult<()> {
    if count < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "count".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_inventory_name() {
        assert_eq!(normalize_inventory_name("Pantry").unwrap(), "pantry");
        assert_eq!(normalize_inventory_name("\tGARAGE\n").unwrap(), "garage");

        assert!(normalize_inventory_name("").is_err());
        assert!(normalize_inventory_name(" \t ").is_err());
        assert!(normalize_inventory_name(&"a".repeat(MAX_NAME_LEN + 1)).is_err());
        assert!(normalize_inventory_name(&"a".repeat(MAX_NAME_LEN)).is_ok());
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("").is_ok());
        assert!(validate_description("Kitchen shelf").is_ok());
        assert!(validate_description(&"x".repeat(MAX_TEXT_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_item_label() {
        assert!(validate_item_label("Flour").is_ok());
        assert!(validate_item_label(&"x".repeat(MAX_TEXT_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_item_count() {
        assert!(validate_item_count(0).is_ok());
        assert!(validate_item_count(250).is_ok());
        assert!(validate_item_count(-3).is_err());
    }
}
