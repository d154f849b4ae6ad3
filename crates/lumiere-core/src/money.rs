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
//! │  OUR SOLUTION: Integer Rupees                                           │
//! │    Jewellery prices in this catalog are whole rupees (₹45,999) with     │
//! │    no paise component, so the smallest unit IS the rupee.               │
//! │    Every calculation stays in i64 — nothing to round, nothing to lose.  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lumiere_core::money::Money;
//!
//! // Create from whole rupees (preferred)
//! let price = Money::from_rupees(45_999);
//!
//! // Arithmetic operations
//! let doubled = price * 2;                       // ₹91,998
//! let total = price + Money::from_rupees(1_000); // ₹46,999
//!
//! // NEVER do this:
//! // let bad = Money::from_float(45999.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole rupees.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and discount math
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// Product.price_rupees ──► CartLine.line_total ──► Session.cart_total
///                                                        │
///                                                        ▼
///                                             Order.total (frozen at
///                                             placement, never recomputed)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use lumiere_core::money::Money;
    ///
    /// let price = Money::from_rupees(32_999);
    /// assert_eq!(price.rupees(), 32_999);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees)
    }

    /// Returns the value in whole rupees.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use lumiere_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(1_000);
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.rupees(), 3_000);
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Product: Gold Teardrop Necklace ₹15,999
    /// Quantity: 2
    ///      │
    ///      ▼
    /// multiply_quantity(2) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: ₹31,998
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. Use frontend formatting for actual UI
/// display to handle locale grouping properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.0.abs().to_string();

        // Insert a separator every three digits from the right
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        write!(f, "{}₹{}", sign, grouped)
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

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
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
