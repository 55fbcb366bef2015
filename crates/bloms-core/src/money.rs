//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  IVA on a $49.999 subtotal:                                             │
//! │    49999 × 0.19 = 9499.81 — a float would drift on larger carts        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    Prices are whole pesos, held as centavos internally.                │
//! │    19% of any whole-peso amount is EXACT in centavos                   │
//! │    (x pesos = 100·x centavos, and 100·x·19/100 = 19·x).                │
//! │    Rounding to whole pesos happens only at display time.               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bloms_core::money::Money;
//!
//! // Create from whole pesos (catalog prices)
//! let price = Money::from_pesos(8000);
//!
//! // Arithmetic operations
//! let line = price * 3;
//! assert_eq!(line.format_cop(), "$24.000");
//!
//! // NEVER from floats:
//! // let bad = Money::from_float(8000.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1900 bps = 19% (Colombian IVA)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in centavos, the smallest COP unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: keeps arithmetic total; amounts here are never negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Centavo scale**: catalog prices are whole pesos, but IVA produces
///   fractional pesos (e.g. 19% of $49.999 = $9.499,81). Centavos keep that
///   exact; [`Money::pesos_rounded`] rounds only for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    #[inline]
    pub const fn from_centavos(centavos: i64) -> Self {
        Money(centavos)
    }

    /// Creates a Money value from whole pesos.
    ///
    /// ## Example
    /// ```rust
    /// use bloms_core::money::Money;
    ///
    /// let price = Money::from_pesos(8000);
    /// assert_eq!(price.centavos(), 800_000);
    /// ```
    ///
    /// ## Why Pesos?
    /// Catalog prices and the persisted cart are minor-unit-free integer
    /// peso amounts; only calculations use the centavo scale.
    #[inline]
    pub const fn from_pesos(pesos: i64) -> Self {
        Money(pesos * 100)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn centavos(&self) -> i64 {
        self.0
    }

    /// Returns the value rounded to whole pesos (half away from zero).
    ///
    /// This is the ONLY place rounding happens; every calculation upstream
    /// is exact in centavos.
    ///
    /// ## Example
    /// ```rust
    /// use bloms_core::money::Money;
    ///
    /// let tax = Money::from_centavos(949_981); // $9.499,81
    /// assert_eq!(tax.pesos_rounded(), 9500);
    /// ```
    #[inline]
    pub const fn pesos_rounded(&self) -> i64 {
        if self.0 >= 0 {
            (self.0 + 50) / 100
        } else {
            -((-self.0 + 50) / 100)
        }
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Calculates tax on this amount.
    ///
    /// ## Implementation
    /// Integer math in i128: `(centavos × bps + 5000) / 10000`. For the
    /// whole-peso subtotals this storefront produces the division is exact,
    /// so the +5000 rounding term never fires.
    ///
    /// ## Example
    /// ```rust
    /// use bloms_core::money::{Money, TaxRate};
    ///
    /// let subtotal = Money::from_pesos(24_000);
    /// let iva = subtotal.calculate_tax(TaxRate::from_bps(1900));
    /// assert_eq!(iva, Money::from_pesos(4560));
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 to prevent overflow on large amounts
        let tax_centavos = (i128::from(self.0) * i128::from(rate.bps()) + 5000) / 10000;
        Money::from_centavos(tax_centavos as i64)
    }

    /// Formats the amount as Colombian Pesos for display.
    ///
    /// Integer pesos (rounded at this point, nowhere earlier), dot-grouped
    /// thousands, `$` prefix, no decimals — the es-CO convention.
    ///
    /// ## Example
    /// ```rust
    /// use bloms_core::money::Money;
    ///
    /// assert_eq!(Money::from_pesos(8000).format_cop(), "$8.000");
    /// assert_eq!(Money::from_pesos(1_234_567).format_cop(), "$1.234.567");
    /// ```
    pub fn format_cop(&self) -> String {
        let pesos = self.pesos_rounded();
        let sign = if pesos < 0 { "-" } else { "" };
        let digits = pesos.abs().to_string();

        // Insert a '.' before every group of three digits from the right
        let offset = digits.len() % 3;
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i != 0 && (i + 3 - offset) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        format!("{sign}${grouped}")
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display delegates to the COP presentation format - the only format this
/// storefront ever shows.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_cop())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pesos() {
        let money = Money::from_pesos(8000);
        assert_eq!(money.centavos(), 800_000);
        assert_eq!(money.pesos_rounded(), 8000);
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_pesos(1000);
        let b = Money::from_pesos(500);

        assert_eq!(a + b, Money::from_pesos(1500));
        assert_eq!(a - b, Money::from_pesos(500));
        assert_eq!(a * 3, Money::from_pesos(3000));
    }

    #[test]
    fn test_iva_exact_on_whole_pesos() {
        // 19% of $24.000 = $4.560, no rounding involved
        let subtotal = Money::from_pesos(24_000);
        let tax = subtotal.calculate_tax(TaxRate::from_bps(1900));
        assert_eq!(tax, Money::from_pesos(4560));
    }

    #[test]
    fn test_iva_fractional_pesos_kept_exact() {
        // 19% of $49.999 = $9.499,81 — exact in centavos
        let subtotal = Money::from_pesos(49_999);
        let tax = subtotal.calculate_tax(TaxRate::from_bps(1900));
        assert_eq!(tax.centavos(), 949_981);
        // Display rounds half-up to whole pesos
        assert_eq!(tax.pesos_rounded(), 9500);
    }

    #[test]
    fn test_format_cop_grouping() {
        assert_eq!(Money::from_pesos(0).format_cop(), "$0");
        assert_eq!(Money::from_pesos(500).format_cop(), "$500");
        assert_eq!(Money::from_pesos(8000).format_cop(), "$8.000");
        assert_eq!(Money::from_pesos(38_560).format_cop(), "$38.560");
        assert_eq!(Money::from_pesos(1_234_567).format_cop(), "$1.234.567");
    }

    #[test]
    fn test_format_cop_rounds_only_at_display() {
        let total = Money::from_centavos(6_949_881); // $69.498,81
        assert_eq!(total.format_cop(), "$69.499");
        // The underlying value is untouched
        assert_eq!(total.centavos(), 6_949_881);
    }

    #[test]
    fn test_display_matches_format_cop() {
        let money = Money::from_pesos(50_000);
        assert_eq!(format!("{money}"), "$50.000");
    }

    #[test]
    fn test_tax_rate_percentage() {
        let rate = TaxRate::from_bps(1900);
        assert_eq!(rate.bps(), 1900);
        assert!((rate.percentage() - 19.0).abs() < 0.001);
    }
}
