//! # State Module
//!
//! Session state for the storefront facade.
//!
//! The catalog is NOT held here: it is immutable after load and is passed to
//! commands as a plain `&Catalog` reference. Only the shopper's mutable
//! session needs a shared container.

mod session;

pub use session::{CartTotals, Notification, Session, SessionState};
