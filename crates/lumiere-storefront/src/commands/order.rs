//! # Order Commands
//!
//! Checkout, order listing, administrative status changes, and tracking.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Flow                                        │
//! │                                                                         │
//! │  Shopper submits the checkout form                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  checkout(session, is_gift, gift_message)                               │
//! │       │                                                                 │
//! │       ├── cart empty? ──────────► BusinessLogic error                   │
//! │       ├── gift message > 250? ──► Validation error                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. Snapshot the cart lines into an Order (total computed HERE,         │
//! │     once, and never recomputed from catalog prices)                     │
//! │  2. place_order  (orders list, most-recent-first)                       │
//! │  3. clear_cart                                                          │
//! │                                                                         │
//! │  Steps 2 and 3 are two independent store calls, not a transaction.      │
//! │  With no persistence there is nothing to make atomic; the pairing is    │
//! │  an accepted property of the system.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::SessionState;
use lumiere_core::validation::validate_gift_message;
use lumiere_core::{CoreError, Order, OrderStatus, ValidationError};

/// Tracking view of one order: the fixed step ladder plus the current rung.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TrackingResponse {
    pub order_id: String,
    pub status: OrderStatus,
    /// 0-based position of `status` in `steps`.
    pub current_step: usize,
    /// The five fulfillment step labels, in order.
    pub steps: Vec<String>,
}

/// Places an order from the current cart.
///
/// ## Behavior
/// - Fails on an empty cart or an over-long gift message, before any state
///   is touched
/// - Snapshots the cart into a new `Confirmed` order with a fresh UUID;
///   the total is frozen at this moment
/// - Records the order (most-recent-first), then clears the cart
pub fn checkout(
    session: &SessionState,
    is_gift: bool,
    gift_message: Option<String>,
) -> Result<Order, ApiError> {
    debug!(is_gift = %is_gift, "checkout command");

    validate_gift_message(gift_message.as_deref())?;

    let order = session.with_session_mut(|s| {
        if s.cart().is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let order = Order::new(
            Uuid::new_v4().to_string(),
            s.cart().to_vec(),
            is_gift,
            gift_message,
        );
        s.place_order(order.clone());
        s.clear_cart();
        Ok(order)
    })?;

    info!(order_id = %order.id, total = %order.total, "order placed");
    Ok(order)
}

/// Placed orders, most recent first.
pub fn list_orders(session: &SessionState) -> Vec<Order> {
    debug!("list_orders command");
    session.with_session(|s| s.orders().to_vec())
}

/// Administrative status change.
///
/// The label arrives as free text from the back-office UI and is parsed
/// against the canonical fulfillment vocabulary; anything else (including
/// the retired Processing/Cancelled set) is rejected. A valid status on an
/// unknown order id is the store's documented no-op.
pub fn update_order_status(
    session: &SessionState,
    order_id: &str,
    status_label: &str,
) -> Result<(), ApiError> {
    debug!(order_id = %order_id, status = %status_label, "update_order_status command");

    let status = OrderStatus::from_label(status_label).ok_or_else(|| {
        ApiError::from(ValidationError::NotAllowed {
            field: "status".to_string(),
            allowed: OrderStatus::SEQUENCE
                .iter()
                .map(|s| s.label().to_string())
                .collect(),
        })
    })?;

    session.with_session_mut(|s| s.update_order_status(order_id, status));
    Ok(())
}

/// Tracking view for one order.
pub fn track_order(session: &SessionState, order_id: &str) -> Result<TrackingResponse, ApiError> {
    debug!(order_id = %order_id, "track_order command");

    session.with_session(|s| {
        let order = s
            .order(order_id)
            .ok_or_else(|| ApiError::not_found("Order", order_id))?;

        Ok(TrackingResponse {
            order_id: order.id.clone(),
            status: order.status,
            current_step: order.status.step_index(),
            steps: OrderStatus::SEQUENCE
                .iter()
                .map(|s| s.label().to_string())
                .collect(),
        })
    })
}
