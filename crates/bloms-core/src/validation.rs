//! # Validation Module
//!
//! Quantity input validation for the storefront.
//!
//! ## Why Explicit Validation?
//! The quantity control on the page is a text field. The original page fed
//! its raw value through an unchecked integer parse, which made non-numeric
//! input produce an undefined quantity. Here the rule is explicit: reject
//! and ignore bad input, never store it.
//!
//! ## Usage
//! ```rust
//! use bloms_core::validation::{parse_quantity, validate_quantity};
//!
//! let qty = parse_quantity(" 3 ").unwrap();
//! validate_quantity(qty).unwrap();
//!
//! assert!(parse_quantity("many").is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::MAX_ITEM_QUANTITY;

/// Parses the raw quantity-field value into an integer.
///
/// Whitespace is trimmed; anything that is not a whole number (including
/// the empty string) is rejected. Negative and zero values parse fine -
/// they mean "remove the item" downstream.
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    let raw = raw.trim();

    raw.parse::<i64>()
        .map_err(|_| ValidationError::InvalidQuantity {
            input: raw.to_string(),
        })
}

/// Validates a quantity that is meant to be stored.
///
/// ## Rules
/// - Must be positive (callers treat <= 0 as removal before this point)
/// - Must not exceed [`MAX_ITEM_QUANTITY`]
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 1 || qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
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
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), Ok(3));
        assert_eq!(parse_quantity("  12 "), Ok(12));
        assert_eq!(parse_quantity("0"), Ok(0));
        assert_eq!(parse_quantity("-5"), Ok(-5));

        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("abc").is_err());
        assert!(parse_quantity("3.5").is_err());
        assert!(parse_quantity("3x").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }
}
