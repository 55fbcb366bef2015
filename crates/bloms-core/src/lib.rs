//! # bloms-core: Pure Business Logic for the Berry Bloms Cart
//!
//! This crate is the **heart** of the Berry Bloms storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Berry Bloms Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Storefront Page (apps/storefront)              │   │
//! │  │    Add Button ──► Cart Panel ──► Breakdown ──► Checkout         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bloms-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │   cart    │  │  pricing  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ Breakdown │  │   │
//! │  │   │           │  │  TaxRate  │  │ LineItem  │  │ IVA, ship │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO RENDERING • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  bloms-store (Persistence Layer)                │   │
//! │  │            SQLite key/value storage of the cart payload         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - The (single-entry) product catalog
//! - [`cart`] - Cart and line-item operations
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Subtotal, IVA, shipping and total
//! - [`error`] - Validation error types
//! - [`validation`] - Quantity input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, rendering, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are centavos (i64) to avoid float errors
//! 4. **Explicit Errors**: Invalid input is rejected with typed errors, never panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bloms_core::Money` instead of
// `use bloms_core::money::Money`

pub use cart::{Cart, LineItem};
pub use catalog::Product;
pub use error::ValidationError;
pub use money::{Money, TaxRate};
pub use pricing::Breakdown;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// IVA (Colombian VAT) rate applied to every cart: 19%.
///
/// Fixed at compile time - the storefront has no runtime tax configuration.
pub const IVA_RATE: TaxRate = TaxRate::from_bps(1900);

/// Subtotal at or above which shipping is waived: $50.000 COP.
pub const FREE_SHIPPING_THRESHOLD: Money = Money::from_pesos(50_000);

/// Flat shipping charge below the free-shipping threshold: $10.000 COP.
pub const SHIPPING_FLAT: Money = Money::from_pesos(10_000);

/// Maximum quantity of a single line item.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10)
/// through the quantity input field.
pub const MAX_ITEM_QUANTITY: i64 = 999;
