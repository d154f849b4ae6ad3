//! # Domain Types
//!
//! Core domain types used throughout the Lumière storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartLine     │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  product (snap) │   │  id (UUID)      │       │
//! │  │  name           │   │  quantity       │   │  items (snap)   │       │
//! │  │  price_rupees   │   │  added_at       │   │  total (frozen) │       │
//! │  │  metal, purity  │   └─────────────────┘   │  status         │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────────────────────┐        │
//! │  │     Metal       │   │           OrderStatus                │        │
//! │  │  ─────────────  │   │  ──────────────────────────────────  │        │
//! │  │  Gold           │   │  Confirmed → Packed → Shipped →      │        │
//! │  │  Silver         │   │  Out for Delivery → Delivered        │        │
//! │  │  Diamond        │   │  (linear, no branching)              │        │
//! │  │  Platinum       │   └──────────────────────────────────────┘        │
//! │  │  One Gram Gold  │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `CartLine` embeds a full copy of the product taken at add time, and an
//! `Order` embeds the cart lines taken at placement time. Later catalog or
//! cart changes never reach back into an existing line or a placed order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Metal
// =============================================================================

/// The metal classification axis of the catalog.
///
/// Orthogonal to `Product::category` (the sub-category axis): a shopper can
/// filter by metal=Gold and category=rings independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Metal {
    Gold,
    Silver,
    Diamond,
    Platinum,
    #[serde(rename = "One Gram Gold")]
    OneGramGold,
}

impl Metal {
    /// Human-readable label, as shown in filter panels.
    pub const fn label(&self) -> &'static str {
        match self {
            Metal::Gold => "Gold",
            Metal::Silver => "Silver",
            Metal::Diamond => "Diamond",
            Metal::Platinum => "Platinum",
            Metal::OneGramGold => "One Gram Gold",
        }
    }

    /// Normalized slug used by the filter engine and in URLs.
    ///
    /// Lowercase with spaces replaced by hyphens: `"one-gram-gold"`.
    pub const fn slug(&self) -> &'static str {
        match self {
            Metal::Gold => "gold",
            Metal::Silver => "silver",
            Metal::Diamond => "diamond",
            Metal::Platinum => "platinum",
            Metal::OneGramGold => "one-gram-gold",
        }
    }

    /// Parses a slug back into a metal. Unknown slugs yield `None`.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "gold" => Some(Metal::Gold),
            "silver" => Some(Metal::Silver),
            "diamond" => Some(Metal::Diamond),
            "platinum" => Some(Metal::Platinum),
            "one-gram-gold" => Some(Metal::OneGramGold),
            _ => None,
        }
    }
}

impl std::fmt::Display for Metal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A sellable catalog product.
///
/// Immutable once loaded into the catalog; every field is an explicit value
/// (optional fields are `Option`, never implicit absence).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name shown in listings and on the detail page.
    pub name: String,

    /// Price in whole rupees.
    pub price_rupees: i64,

    /// Pre-discount price, when the product is on offer.
    /// Invariant: when present, `original_price_rupees >= price_rupees`.
    pub original_price_rupees: Option<i64>,

    /// Primary image reference.
    pub image: String,

    /// Gallery image references (detail page).
    pub images: Vec<String>,

    /// Sub-category slug (free text, e.g. "rings", "necklaces").
    pub category: String,

    /// Metal classification.
    pub metal: Metal,

    /// Purity label (e.g. "22K", "Sterling Silver").
    pub purity: String,

    /// Weight label (e.g. "8.5g").
    pub weight: String,

    /// Marketing description.
    pub description: String,

    /// Average review rating, 0.0 to 5.0.
    pub rating: f32,

    /// Number of reviews behind the rating.
    pub review_count: u32,

    /// New-arrival flag (drives the "newest" sort partition).
    pub is_new: bool,

    /// Bestseller flag (badge only, no core behavior attached).
    pub is_bestseller: bool,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_rupees(self.price_rupees)
    }

    /// Returns the pre-discount price, if the product is on offer.
    #[inline]
    pub fn original_price(&self) -> Option<Money> {
        self.original_price_rupees.map(Money::from_rupees)
    }

    /// Discount percentage relative to the original price, rounded to the
    /// nearest whole percent. `None` when the product is not on offer.
    ///
    /// ## Example
    /// ```rust
    /// # use lumiere_core::types::{Metal, Product};
    /// # let mut product = Product {
    /// #     id: "1".into(), name: "Bracelet".into(), price_rupees: 45_999,
    /// #     original_price_rupees: Some(52_999), image: String::new(),
    /// #     images: vec![], category: "bangles".into(), metal: Metal::Gold,
    /// #     purity: "18K".into(), weight: "8.5g".into(),
    /// #     description: String::new(), rating: 4.8, review_count: 124,
    /// #     is_new: true, is_bestseller: false,
    /// # };
    /// assert_eq!(product.discount_percent(), Some(13));
    /// product.original_price_rupees = None;
    /// assert_eq!(product.discount_percent(), None);
    /// ```
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price_rupees?;
        if original <= 0 {
            return None;
        }
        let saved = original - self.price_rupees;
        // Round to nearest: add half the divisor before dividing
        Some(((saved * 100 + original / 2) / original) as u32)
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// A line in the shopping cart: one product plus a quantity.
///
/// ## Design Notes
/// - Identity is the product id: at most one line per product exists in a
///   cart at any time; adding the same product again merges quantities.
/// - The embedded product is a snapshot taken at add time: the line keeps
///   displaying consistent data even if the catalog entry changes later.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    /// Product snapshot taken when the line was created.
    pub product: Product,

    /// Quantity in cart. Invariant: never less than 1.
    pub quantity: i64,

    /// When this line was added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new cart line from a product and quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            product: product.clone(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Line total: price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Fulfillment status of a placed order.
///
/// The sequence is linear with no branching and no cancellation path:
/// `Confirmed → Packed → Shipped → Out for Delivery → Delivered`.
///
/// ## Not a Guarded State Machine
/// Status is a label advanced by explicit administrative action. Nothing
/// prevents setting a Delivered order back to Confirmed — the back office
/// occasionally needs to correct mistakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum OrderStatus {
    Confirmed,
    Packed,
    Shipped,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// The fixed fulfillment sequence, in order.
    pub const SEQUENCE: [OrderStatus; 5] = [
        OrderStatus::Confirmed,
        OrderStatus::Packed,
        OrderStatus::Shipped,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    /// Position of this status in the fulfillment sequence (0-based).
    ///
    /// Total by construction: the enum is closed, so every status has a
    /// step. (An open string-typed status would need a "not found" fallback;
    /// that ambiguity is deliberately unrepresentable here.)
    pub const fn step_index(&self) -> usize {
        match self {
            OrderStatus::Confirmed => 0,
            OrderStatus::Packed => 1,
            OrderStatus::Shipped => 2,
            OrderStatus::OutForDelivery => 3,
            OrderStatus::Delivered => 4,
        }
    }

    /// Human-readable label, as shown in tracking and admin views.
    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Packed => "Packed",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
        }
    }

    /// Parses a status label. Labels outside the canonical vocabulary
    /// (including the retired Processing/Cancelled set) yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Confirmed" => Some(OrderStatus::Confirmed),
            "Packed" => Some(OrderStatus::Packed),
            "Shipped" => Some(OrderStatus::Shipped),
            "Out for Delivery" => Some(OrderStatus::OutForDelivery),
            "Delivered" => Some(OrderStatus::Delivered),
            _ => None,
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Confirmed
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Order
// =============================================================================

/// A placed order: an immutable snapshot of the cart at checkout plus a
/// mutable fulfillment status.
///
/// ## Total Freezing
/// The total is computed once at placement from the snapshot and never
/// recomputed — catalog price changes after checkout do not affect it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    /// Unique identifier (UUID v4, assigned at checkout).
    pub id: String,

    /// When the order was placed.
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,

    /// Cart lines at the moment of checkout, decoupled from the live cart.
    pub items: Vec<CartLine>,

    /// Sum of price × quantity at placement time.
    pub total: Money,

    /// Current fulfillment status. The only mutable field.
    pub status: OrderStatus,

    /// Whether the shopper marked this order as a gift.
    pub is_gift: bool,

    /// Optional message for gift orders.
    pub gift_message: Option<String>,
}

impl Order {
    /// Creates a new order from a cart snapshot.
    ///
    /// The total is computed here, once; new orders start `Confirmed`.
    pub fn new(
        id: String,
        items: Vec<CartLine>,
        is_gift: bool,
        gift_message: Option<String>,
    ) -> Self {
        let mut total = Money::zero();
        for line in &items {
            total += line.line_total();
        }

        Order {
            id,
            placed_at: Utc::now(),
            items,
            total,
            status: OrderStatus::Confirmed,
            is_gift,
            gift_message,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price_rupees: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price_rupees,
            original_price_rupees: None,
            image: format!("{}.jpg", id),
            images: vec![],
            category: "rings".to_string(),
            metal: Metal::Gold,
            purity: "18K".to_string(),
            weight: "4.1g".to_string(),
            description: String::new(),
            rating: 4.5,
            review_count: 10,
            is_new: false,
            is_bestseller: false,
        }
    }

    #[test]
    fn test_metal_slug_round_trip() {
        for metal in [
            Metal::Gold,
            Metal::Silver,
            Metal::Diamond,
            Metal::Platinum,
            Metal::OneGramGold,
        ] {
            assert_eq!(Metal::from_slug(metal.slug()), Some(metal));
        }
        assert_eq!(Metal::OneGramGold.slug(), "one-gram-gold");
        assert_eq!(Metal::from_slug("rose-gold"), None);
    }

    #[test]
    fn test_discount_percent() {
        let mut product = test_product("1", 45_999);
        assert_eq!(product.discount_percent(), None);

        product.original_price_rupees = Some(52_999);
        assert_eq!(product.discount_percent(), Some(13));

        // No discount still reports a (zero) percentage
        product.original_price_rupees = Some(45_999);
        assert_eq!(product.discount_percent(), Some(0));
    }

    #[test]
    fn test_cart_line_total() {
        let product = test_product("1", 15_999);
        let line = CartLine::from_product(&product, 2);
        assert_eq!(line.line_total().rupees(), 31_998);
    }

    #[test]
    fn test_order_status_sequence() {
        assert_eq!(OrderStatus::Confirmed.step_index(), 0);
        assert_eq!(OrderStatus::Delivered.step_index(), 4);
        assert_eq!(
            OrderStatus::SEQUENCE[OrderStatus::OutForDelivery.step_index()],
            OrderStatus::OutForDelivery
        );
    }

    #[test]
    fn test_order_status_labels() {
        assert_eq!(OrderStatus::OutForDelivery.label(), "Out for Delivery");
        assert_eq!(
            OrderStatus::from_label("Out for Delivery"),
            Some(OrderStatus::OutForDelivery)
        );

        // Retired vocabulary from the earlier iteration is rejected
        assert_eq!(OrderStatus::from_label("Processing"), None);
        assert_eq!(OrderStatus::from_label("Cancelled"), None);
    }

    #[test]
    fn test_order_total_frozen_at_construction() {
        let lines = vec![
            CartLine::from_product(&test_product("g1", 1_000), 2),
            CartLine::from_product(&test_product("d1", 2_000), 1),
        ];
        let order = Order::new("order-1".to_string(), lines, false, None);

        assert_eq!(order.total.rupees(), 4_000);
        assert_eq!(order.status, OrderStatus::Confirmed);
    }

    #[test]
    fn test_order_status_serde_labels() {
        let json = serde_json::to_string(&OrderStatus::OutForDelivery).unwrap();
        assert_eq!(json, "\"Out for Delivery\"");
        let back: OrderStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OrderStatus::OutForDelivery);
    }
}
