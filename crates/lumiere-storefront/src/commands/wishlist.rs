//! # Wishlist Commands
//!
//! Wishlist membership toggling. Set semantics throughout: a product is
//! either saved or it isn't — no quantities, no duplicates.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::ApiError;
use crate::state::SessionState;
use lumiere_catalog::Catalog;
use lumiere_core::Product;

/// Wishlist response after a toggle or read.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WishlistResponse {
    pub items: Vec<Product>,
}

/// Toggles wishlist membership for a product (XOR semantics).
///
/// Adding an already-present product removes it instead; toggling twice
/// returns the wishlist to its original state.
pub fn toggle_wishlist(
    catalog: &Catalog,
    session: &SessionState,
    product_id: &str,
) -> Result<WishlistResponse, ApiError> {
    debug!(product_id = %product_id, "toggle_wishlist command");

    let product = catalog
        .get(product_id)
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    Ok(session.with_session_mut(|s| {
        s.toggle_wishlist(product);
        WishlistResponse {
            items: s.wishlist().to_vec(),
        }
    }))
}

/// Pure membership query.
pub fn is_in_wishlist(session: &SessionState, product_id: &str) -> bool {
    session.with_session(|s| s.is_in_wishlist(product_id))
}

/// Current wishlist contents.
pub fn get_wishlist(session: &SessionState) -> WishlistResponse {
    debug!("get_wishlist command");
    session.with_session(|s| WishlistResponse {
        items: s.wishlist().to_vec(),
    })
}
