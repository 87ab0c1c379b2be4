//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  └── ValidationError  - Receipt validation failures                    │
//! │                                                                         │
//! │  receipt-store errors (separate crate)                                 │
//! │  └── StoreError       - Lookup failures                                │
//! │                                                                         │
//! │  HTTP API errors (in app)                                              │
//! │  └── ApiError         - What clients see (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError → "The receipt is invalid."           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, item index)
//! 3. Errors are enum variants, never String
//! 4. The specific reason is for logs only; clients get a generic message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Receipt validation errors.
///
/// Checks run in a fixed order and the first failure is reported:
/// ```text
/// MissingField → InvalidRetailer → InvalidDate → InvalidTime
///              → InvalidTotal → NoItems → InvalidItem
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required top-level field is absent.
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// Retailer is empty or contains characters outside `[\w\s\-&]`.
    #[error("Invalid retailer name")]
    InvalidRetailer,

    /// Purchase date is not a real date in `YYYY-MM-DD` form.
    #[error("Invalid purchase date format")]
    InvalidDate,

    /// Purchase time is not a 24-hour `HH:MM` time.
    #[error("Invalid purchase time format")]
    InvalidTime,

    /// Total does not match `\d+\.\d{2}`.
    #[error("Invalid total format")]
    InvalidTotal,

    /// Items list is empty.
    #[error("At least one item is required")]
    NoItems,

    /// An item is missing a field or has a malformed one.
    #[error("Invalid item at index {index}: {reason}")]
    InvalidItem { index: usize, reason: ItemDefect },
}

/// What was wrong with a rejected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ItemDefect {
    #[error("missing shortDescription")]
    MissingDescription,

    #[error("missing price")]
    MissingPrice,

    #[error("invalid shortDescription")]
    InvalidDescription,

    #[error("invalid price format")]
    InvalidPrice,
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MissingField { field: "total" };
        assert_eq!(err.to_string(), "Missing required field: total");

        let err = ValidationError::InvalidItem {
            index: 2,
            reason: ItemDefect::InvalidPrice,
        };
        assert_eq!(err.to_string(), "Invalid item at index 2: invalid price format");
    }
}
