//! # Validation Module
//!
//! Input validation for product payloads and listing parameters.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractors (shelf-api)                                  │
//! │  └── Shape checks (JSON syntax, types, integer path ids)               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── name:     1..=255 characters                                      │
//! │  ├── quantity: 1..=1000                                                │
//! │  ├── price:    >= 1, finite                                            │
//! │  └── page:     skip >= 0, limit >= 0                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── UNIQUE(product_name)                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shelf_core::validation::{validate_price, validate_quantity};
//!
//! assert!(validate_quantity(1000).is_ok());
//! assert!(validate_quantity(1001).is_err());
//! assert!(validate_price(1.0).is_ok());
//! ```

use crate::error::ValidationError;
use crate::{MAX_NAME_LENGTH, MAX_QUANTITY, MIN_PRICE, MIN_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 255 characters (Unicode scalar values, not bytes)
///
/// The name is stored exactly as given; no trimming happens here.
///
/// ## Example
/// ```rust
/// use shelf_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Pen").is_ok());
/// assert!(validate_product_name("").is_err());
/// assert!(validate_product_name(&"é".repeat(255)).is_ok());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "product_name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "product_name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity.
///
/// ## Rules
/// - Between 1 and 1000, both inclusive
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
        return Err(ValidationError::OutOfRange {
            field: "product_quantity".to_string(),
            min: MIN_QUANTITY,
            max: MAX_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Must be a finite number
/// - Must be at least 1
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "product_price".to_string(),
        });
    }

    if price < MIN_PRICE {
        return Err(ValidationError::BelowMinimum {
            field: "product_price".to_string(),
            min: MIN_PRICE,
        });
    }

    Ok(())
}

// =============================================================================
// Pagination Validators
// =============================================================================

/// Validates listing parameters.
///
/// Negative values have no defined meaning for an offset query, so both are
/// rejected. There is no upper bound on `limit`.
pub fn validate_page(skip: i64, limit: i64) -> ValidationResult<()> {
    if skip < 0 {
        return Err(ValidationError::Negative {
            field: "skip".to_string(),
        });
    }

    if limit < 0 {
        return Err(ValidationError::Negative {
            field: "limit".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
