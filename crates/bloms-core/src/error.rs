//! # Error Types
//!
//! Validation errors for bloms-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Quantity input "abc"                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ValidationError (this file) ← typed rejection, never a parse of NaN    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (storefront) ← logged as a warning, cart left untouched       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending input in the message
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements. The cart's own
/// state transitions are total functions and cannot fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Quantity field content is not an integer.
    ///
    /// ## When This Occurs
    /// The quantity input is free text at the page level; anything that is
    /// not a whole number is rejected here instead of flowing into the cart
    /// as an undefined value.
    #[error("quantity '{input}' is not a whole number")]
    InvalidQuantity { input: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::InvalidQuantity {
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "quantity 'abc' is not a whole number");

        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: 999,
        };
        assert_eq!(err.to_string(), "quantity must be between 1 and 999");
    }
}
