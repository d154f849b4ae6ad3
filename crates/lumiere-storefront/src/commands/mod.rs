//! # Commands Module
//!
//! All operations exposed to the presentation shell.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── product.rs   ◄─── Listing (filter + sort) and detail lookup
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── wishlist.rs  ◄─── Wishlist toggling
//! └── order.rs     ◄─── Checkout, order list, status, tracking
//! ```
//!
//! ## How Commands Work
//! Each command is a plain function: it takes the state it needs as explicit
//! references (`&Catalog` and/or `&SessionState`), logs the invocation, and
//! returns a serializable response. The shell binds them to whatever IPC or
//! event mechanism it uses — the facade does not care.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Presentation shell                                                     │
//! │  ──────────────────                                                     │
//! │  cart::add_to_cart(&catalog, &session, "2", Some(1))                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  1. Resolve the product through the catalog (NotFound is the only       │
//! │     possible failure)                                                   │
//! │  2. Mutate the session under its lock (total, cannot fail)              │
//! │  3. Return the updated CartResponse                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod order;
pub mod product;
pub mod wishlist;
