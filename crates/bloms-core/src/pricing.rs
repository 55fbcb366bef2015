//! # Pricing Engine
//!
//! Pure, stateless functions computing the price breakdown of a cart.
//!
//! ## The Breakdown
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Subtotal   Σ price × quantity                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  IVA        subtotal × 19%                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Envío      0 if subtotal = 0 (nothing to ship)                        │
//! │             0 if subtotal >= $50.000 (free-shipping threshold)         │
//! │             $10.000 otherwise                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Total      subtotal + IVA + envío                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rate and thresholds are compile-time constants ([`crate::IVA_RATE`],
//! [`crate::FREE_SHIPPING_THRESHOLD`], [`crate::SHIPPING_FLAT`]). Nothing
//! here rounds; display formatting rounds to whole pesos at the edge.

use crate::cart::Cart;
use crate::money::Money;
use crate::{FREE_SHIPPING_THRESHOLD, IVA_RATE, SHIPPING_FLAT};

/// Sum of price × quantity over all line items.
pub fn subtotal(cart: &Cart) -> Money {
    cart.items()
        .iter()
        .fold(Money::zero(), |acc, item| acc + item.line_total())
}

/// IVA (19%) on a subtotal.
pub fn tax(subtotal: Money) -> Money {
    subtotal.calculate_tax(IVA_RATE)
}

/// Shipping charge for a subtotal.
///
/// Zero for an empty cart (nothing to ship) and at or above the
/// free-shipping threshold; the flat charge otherwise.
pub fn shipping(subtotal: Money) -> Money {
    if subtotal.is_zero() || subtotal >= FREE_SHIPPING_THRESHOLD {
        Money::zero()
    } else {
        SHIPPING_FLAT
    }
}

/// Full price breakdown of a cart, computed in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakdown {
    pub subtotal: Money,
    pub tax: Money,
    pub shipping: Money,
    pub total: Money,
    /// Free-shipping threshold met on a non-empty cart. Drives the
    /// struck-through shipping price + "Gratis" label in the UI.
    pub free_shipping: bool,
}

impl Breakdown {
    /// Computes the breakdown for the current cart contents.
    pub fn compute(cart: &Cart) -> Self {
        let subtotal = subtotal(cart);
        let tax = tax(subtotal);
        let shipping = shipping(subtotal);

        Breakdown {
            subtotal,
            tax,
            shipping,
            total: subtotal + tax + shipping,
            free_shipping: !subtotal.is_zero() && subtotal >= FREE_SHIPPING_THRESHOLD,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
