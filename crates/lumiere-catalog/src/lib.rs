//! # lumiere-catalog: Catalog Store + Filter/Sort Engine
//!
//! The source of truth for all listing and detail views, and the pure
//! pipeline that narrows it down for display.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Listing Flow                                 │
//! │                                                                         │
//! │  Shopper adjusts a filter (metal=gold) or types a query                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  list_products(catalog, filter, sort)     (storefront facade)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Catalog::search ── ProductFilter::matches per product (AND of all      │
//! │       │             active predicates, order immaterial)                │
//! │       ▼                                                                 │
//! │  SortKey comparator (stable; ties keep catalog order)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Fresh Vec<Product> - recomputed on every change, source never mutated  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod filter;

pub use catalog::Catalog;
pub use filter::{ProductFilter, SortKey};
