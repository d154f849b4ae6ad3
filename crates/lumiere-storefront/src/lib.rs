//! # Lumière Storefront Facade
//!
//! Session state and command functions for the Lumière jewellery storefront.
//! This crate is what the presentation shell (out of scope here) links
//! against: it owns the shopper's mutable session and exposes every
//! operation a view needs.
//!
//! ## Module Organization
//! ```text
//! lumiere_storefront/
//! ├── lib.rs           ◄─── You are here (exports)
//! ├── state/
//! │   ├── mod.rs       ◄─── State type exports
//! │   └── session.rs   ◄─── Session store (cart/wishlist/orders)
//! ├── commands/
//! │   ├── mod.rs       ◄─── Command exports
//! │   ├── product.rs   ◄─── Listing / detail lookups
//! │   ├── cart.rs      ◄─── Cart manipulation
//! │   ├── wishlist.rs  ◄─── Wishlist toggling
//! │   └── order.rs     ◄─── Checkout, order list, status, tracking
//! ├── error.rs         ◄─── API error type for commands
//! └── logging.rs       ◄─── tracing-subscriber setup
//! ```
//!
//! ## State Injection
//! Commands take the state they operate on as explicit arguments: a
//! `&Catalog` (immutable, shared by reference across every view) and/or a
//! `&SessionState` (the single authoritative session container). Nothing is
//! ambient or global, so tests instantiate isolated sessions freely:
//!
//! ```rust
//! use lumiere_storefront::state::SessionState;
//! use lumiere_storefront::commands::cart;
//!
//! let session = SessionState::new();
//! let response = cart::get_cart(&session);
//! assert!(response.items.is_empty());
//! ```

pub mod commands;
pub mod error;
pub mod logging;
pub mod state;
