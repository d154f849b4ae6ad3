//! # lumiere-core: Pure Business Logic for the Lumière Storefront
//!
//! This crate is the **heart** of the storefront. It contains all business
//! logic as pure functions and plain types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Lumière Storefront Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation Shell (out of scope)                │   │
//! │  │    Listing UI ──► Cart UI ──► Checkout UI ──► Track Order UI    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             lumiere-storefront (commands facade)                 │   │
//! │  │    list_products, add_to_cart, checkout, track_order, etc.      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lumiere-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   error   │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │ CoreError │  │   rules   │  │   │
//! │  │   │   Order   │  │  ₹ math   │  │           │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartLine, Order, OrderStatus)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Integer Money**: All monetary values are whole rupees (i64) to avoid
//!    float errors
//! 2. **Total Operations**: Session mutations never fail; failure exists only
//!    at the facade boundary and is typed
//! 3. **Snapshot Pattern**: Cart lines and order items freeze product data at
//!    the moment they are created
//!
//! ## Example Usage
//!
//! ```rust
//! use lumiere_core::money::Money;
//!
//! // Create money from whole rupees (never from floats!)
//! let price = Money::from_rupees(45_999);
//!
//! // Line total for quantity 2
//! let line_total = price.multiply_quantity(2);
//! assert_eq!(line_total.rupees(), 91_998);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use lumiere_core::Money` instead of
// `use lumiere_core::money::Money`

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a free-text search query.
///
/// ## Why a bound?
/// The query comes straight from an input box. Anything longer than this is
/// noise (or paste accidents) and would never match a product name anyway.
pub const SEARCH_QUERY_MAX_LEN: usize = 100;

/// Maximum length of a gift message attached to an order.
///
/// Matches the character counter the gifting form shows the shopper.
pub const GIFT_MESSAGE_MAX_LEN: usize = 250;
