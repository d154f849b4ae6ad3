//! # Session Store
//!
//! Single authoritative in-memory container for the shopper's mutable
//! session state: cart lines, wishlist set, and placed orders.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  Shopper Action            Command                 Session Change       │
//! │  ──────────────            ───────                 ──────────────       │
//! │                                                                         │
//! │  Add to Cart ────────────► add_to_cart() ────────► merge or push line   │
//! │                                                                         │
//! │  Change Quantity ────────► update_cart_item() ───► line.quantity = n    │
//! │                                                    (n < 1 is ignored)   │
//! │  Remove Line ────────────► remove_from_cart() ───► retain others        │
//! │                                                                         │
//! │  Heart Icon ─────────────► toggle_wishlist() ────► XOR membership       │
//! │                                                                         │
//! │  Place Order ────────────► checkout() ───────────► orders.insert(0, _)  │
//! │                                                    then cart.clear()    │
//! │  Admin Status Change ────► update_order_status() ► order.status = s     │
//! │                                                                         │
//! │  NOTE: Every mutation is synchronous and total - it either applies      │
//! │        the described effect or is a documented no-op. There is no       │
//! │        partial-failure state because there is no I/O.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Persistence
//! The session is process-scoped: nothing survives a restart. That is a
//! deliberate property of the system, not an omission — see the non-goals.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use lumiere_core::{CartLine, Money, Order, OrderStatus, Product};

// =============================================================================
// Notification
// =============================================================================

/// A user-visible confirmation raised by a session mutation.
///
/// The presentation layer drains these and renders them however it likes
/// (toasts in the reference frontend). The store never blocks on them.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Notification {
    pub message: String,
    #[ts(as = "String")]
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    fn now(message: String) -> Self {
        Notification {
            message,
            raised_at: Utc::now(),
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// The shopper's session: cart, wishlist, orders, pending notifications.
///
/// ## Invariants
/// - At most one cart line per product id (adding merges quantities)
/// - Cart quantity is never less than 1; decrementing below 1 is a no-op,
///   not a removal
/// - Wishlist has set semantics: present or absent, no duplicates
/// - Orders are kept most-recent-first
#[derive(Debug, Clone, Default)]
pub struct Session {
    cart: Vec<CartLine>,
    wishlist: Vec<Product>,
    orders: Vec<Order>,
    notifications: Vec<Notification>,
}

impl Session {
    /// Creates a new empty session.
    pub fn new() -> Self {
        Session::default()
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    /// Adds a product to the cart, merging with an existing line.
    ///
    /// ## Behavior
    /// - Product already in cart: its line's quantity increases by `quantity`
    /// - Otherwise: a new line is appended with that quantity
    /// - `quantity < 1` is ignored (same policy as `update_quantity`)
    /// - No upper bound, no stock check - this operation never fails
    ///
    /// Raises a confirmation notification on success.
    pub fn add_to_cart(&mut self, product: &Product, quantity: i64) {
        if quantity < 1 {
            return;
        }

        if let Some(line) = self.cart.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += quantity;
        } else {
            self.cart.push(CartLine::from_product(product, quantity));
        }

        self.notifications
            .push(Notification::now(format!("{} added to cart", product.name)));
    }

    /// Removes the line with the given product id. No-op if absent.
    pub fn remove_from_cart(&mut self, id: &str) {
        self.cart.retain(|l| l.product.id != id);
    }

    /// Sets a line's quantity.
    ///
    /// ## Behavior
    /// - `qty < 1`: the call is ignored entirely. This is a deliberate
    ///   edge-case policy, not a removal path - removal is its own action.
    /// - Unknown id: no-op.
    pub fn update_quantity(&mut self, id: &str, qty: i64) {
        if qty < 1 {
            return;
        }

        if let Some(line) = self.cart.iter_mut().find(|l| l.product.id == id) {
            line.quantity = qty;
        }
    }

    /// Empties the cart unconditionally.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Current cart lines, in add order.
    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    /// Sum of quantities across all lines.
    ///
    /// Recomputed on every access - never cached as stored state.
    pub fn cart_count(&self) -> i64 {
        self.cart.iter().map(|l| l.quantity).sum()
    }

    /// Sum of price × quantity across all lines.
    ///
    /// Recomputed on every access - never cached as stored state.
    pub fn cart_total(&self) -> Money {
        let mut total = Money::zero();
        for line in &self.cart {
            total += line.line_total();
        }
        total
    }

    // -------------------------------------------------------------------------
    // Wishlist
    // -------------------------------------------------------------------------

    /// Toggles wishlist membership by product id (XOR semantics): adding an
    /// already-present product removes it instead.
    pub fn toggle_wishlist(&mut self, product: &Product) {
        if self.is_in_wishlist(&product.id) {
            self.wishlist.retain(|p| p.id != product.id);
        } else {
            self.wishlist.push(product.clone());
        }
    }

    /// Pure membership query.
    pub fn is_in_wishlist(&self, id: &str) -> bool {
        self.wishlist.iter().any(|p| p.id == id)
    }

    /// Current wishlist, in add order.
    pub fn wishlist(&self) -> &[Product] {
        &self.wishlist
    }

    // -------------------------------------------------------------------------
    // Orders
    // -------------------------------------------------------------------------

    /// Records a placed order, most-recent-first.
    ///
    /// Does NOT clear the cart: that is the checkout flow's responsibility,
    /// and the two calls are deliberately independent (there is no
    /// persistence, hence no transaction to wrap them in).
    pub fn place_order(&mut self, order: Order) {
        self.orders.insert(0, order);
    }

    /// Replaces the status of the matching order.
    ///
    /// No-op if the id is unknown. Raises a notification naming the new
    /// status when the order is found.
    pub fn update_order_status(&mut self, order_id: &str, status: OrderStatus) {
        if let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) {
            order.status = status;
            self.notifications.push(Notification::now(format!(
                "Order {} is now {}",
                order_id, status
            )));
        }
    }

    /// Placed orders, most recent first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Looks up an order by id.
    pub fn order(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    // -------------------------------------------------------------------------
    // Notifications
    // -------------------------------------------------------------------------

    /// Hands all pending notifications to the caller, clearing the queue.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain(..).collect()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Derived cart aggregates for API responses.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Number of distinct cart lines.
    pub line_count: usize,
    /// Sum of quantities (what the cart badge shows).
    pub cart_count: i64,
    /// Sum of price × quantity.
    pub cart_total: Money,
}

impl From<&Session> for CartTotals {
    fn from(session: &Session) -> Self {
        CartTotals {
            line_count: session.cart().len(),
            cart_count: session.cart_count(),
            cart_total: session.cart_total(),
        }
    }
}

// =============================================================================
// Shared Session State
// =============================================================================

/// Shared, injectable session container.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Session>>`:
/// - `Arc`: shared ownership across every consuming view
/// - `Mutex`: one mutation at a time
///
/// The domain itself is single-writer (sequential user interactions), but
/// the embedding shell may call commands from multiple threads, so the
/// container is defensive anyway.
///
/// ## Why Not RwLock?
/// Session operations are quick and most of them write. A RwLock would add
/// complexity with minimal benefit.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Creates a new empty session state.
    pub fn new() -> Self {
        SessionState {
            session: Arc::new(Mutex::new(Session::new())),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = session_state.with_session(|s| CartTotals::from(s));
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session_state.with_session_mut(|s| s.clear_cart());
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        f(&mut session)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
