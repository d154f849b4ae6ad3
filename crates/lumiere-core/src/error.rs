//! # Error Types
//!
//! Domain-specific error types for lumiere-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lumiere-core errors (this file)                                        │
//! │  ├── CoreError        - Business rule violations                        │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  Storefront API errors (facade crate)                                   │
//! │  └── ApiError         - What the frontend sees (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Where Errors Can Happen at All
//! Session store mutations are total: invalid quantities, absent ids, and
//! unknown orders are documented no-ops, not errors. Failure exists only at
//! the facade boundary — an unknown product id, an empty-cart checkout, an
//! over-long query or gift message, a status label outside the canonical
//! vocabulary.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field names, limits)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Checkout was attempted with nothing in the cart.
    ///
    /// The checkout flow refuses to snapshot an empty cart into an order;
    /// the UI shows "Nothing to checkout" for this case.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements. Used for early
/// validation before any state is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value is not in the allowed set (e.g. an order status label outside
    /// the canonical fulfillment vocabulary).
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed {
        field: String,
        allowed: Vec<String>,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
