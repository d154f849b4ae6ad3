//! # Cart Commands
//!
//! Cart manipulation for the storefront.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Placed  │       │
//! │  │  Cart    │     │          │     │   Form   │     │  Order   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       checkout                           │
//! │                   update_cart_item  (order.rs)                          │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutation here is total: the only failure in this module is an
//! unknown product id on `add_to_cart` (the catalog lookup), never the cart
//! operation itself.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::ApiError;
use crate::state::{CartTotals, SessionState};
use lumiere_catalog::Catalog;
use lumiere_core::CartLine;

/// Cart response including lines and derived totals.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    pub totals: CartTotals,
}

impl CartResponse {
    fn from_session(session: &crate::state::Session) -> Self {
        CartResponse {
            items: session.cart().to_vec(),
            totals: CartTotals::from(session),
        }
    }
}

/// Gets the current cart contents and totals.
pub fn get_cart(session: &SessionState) -> CartResponse {
    debug!("get_cart command");
    session.with_session(CartResponse::from_session)
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity increases
/// - Product not in cart: added as a new line (the product data is frozen
///   into the line at this moment)
/// - `quantity` defaults to 1; no upper bound, no stock check
///
/// ## Returns
/// Updated cart. The only failure is an unknown product id.
pub fn add_to_cart(
    catalog: &Catalog,
    session: &SessionState,
    product_id: &str,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

    let product = catalog
        .get(product_id)
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    Ok(session.with_session_mut(|s| {
        s.add_to_cart(product, quantity);
        CartResponse::from_session(s)
    }))
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - `quantity < 1`: ignored entirely (the line keeps its quantity) —
///   removal is its own command, not a side effect of this one
/// - Unknown id: no-op
pub fn update_cart_item(
    session: &SessionState,
    product_id: &str,
    quantity: i64,
) -> CartResponse {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    session.with_session_mut(|s| {
        s.update_quantity(product_id, quantity);
        CartResponse::from_session(s)
    })
}

/// Removes a line from the cart. No-op if the id is not in the cart.
pub fn remove_from_cart(session: &SessionState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    session.with_session_mut(|s| {
        s.remove_from_cart(product_id);
        CartResponse::from_session(s)
    })
}

/// Clears all lines from the cart.
pub fn clear_cart(session: &SessionState) -> CartResponse {
    debug!("clear_cart command");

    session.with_session_mut(|s| {
        s.clear_cart();
        CartResponse::from_session(s)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use lumiere_core::{Metal, Product};

    fn test_product(id: &str, price: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price_rupees: price,
            original_price_rupees: None,
            image: format!("{}.jpg", id),
            images: vec![],
            category: "bangles".to_string(),
            metal: Metal::Silver,
            purity: "Sterling Silver".to_string(),
            weight: "12g".to_string(),
            description: String::new(),
            rating: 4.3,
            review_count: 312,
            is_new: false,
            is_bestseller: false,
        }
    }

    fn fixture() -> Catalog {
        Catalog::new(vec![test_product("g1", 1_000), test_product("d1", 2_000)])
    }

    #[test]
    fn test_add_to_cart_and_totals() {
        let catalog = fixture();
        let session = SessionState::new();

        add_to_cart(&catalog, &session, "g1", Some(2)).unwrap();
        let response = add_to_cart(&catalog, &session, "d1", None).unwrap();

        assert_eq!(response.items.len(), 2);
        assert_eq!(response.totals.cart_count, 3);
        assert_eq!(response.totals.cart_total.rupees(), 4_000);
    }

    #[test]
    fn test_add_unknown_product_is_not_found() {
        let catalog = fixture();
        let session = SessionState::new();

        let err = add_to_cart(&catalog, &session, "missing", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&session).items.is_empty());
    }

    #[test]
    fn test_update_below_one_keeps_quantity() {
        let catalog = fixture();
        let session = SessionState::new();
        add_to_cart(&catalog, &session, "g1", Some(2)).unwrap();

        let response = update_cart_item(&session, "g1", 0);
        assert_eq!(response.items[0].quantity, 2);
    }

    #[test]
    fn test_remove_and_clear() {
        let catalog = fixture();
        let session = SessionState::new();
        add_to_cart(&catalog, &session, "g1", Some(1)).unwrap();
        add_to_cart(&catalog, &session, "d1", Some(1)).unwrap();

        let response = remove_from_cart(&session, "g1");
        assert_eq!(response.items.len(), 1);

        // Absent id: documented no-op
        let response = remove_from_cart(&session, "g1");
        assert_eq!(response.items.len(), 1);

        let response = clear_cart(&session);
        assert!(response.items.is_empty());
        assert!(response.totals.cart_total.is_zero());
    }
}
