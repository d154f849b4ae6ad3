//! # Filter/Sort Engine
//!
//! Pure functions that derive a display list from the catalog given a filter
//! configuration and a sort key.
//!
//! ## Predicate Semantics
//! All predicates are independent and conjunctive: a product must satisfy
//! every ACTIVE predicate to appear. An absent (or empty) filter value
//! imposes no constraint, so application order is immaterial.
//!
//! ## One Documented Aliasing Exception
//! The sub-category labels "necksets" and "necklaces" are treated as
//! interchangeable. They come from two historically different taxonomies of
//! the same jewellery line, and products are tagged with either.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use lumiere_core::{Metal, Money, Product};

// =============================================================================
// Filter Configuration
// =============================================================================

/// Filter configuration for a product listing.
///
/// Every field is optional; `ProductFilter::default()` matches the whole
/// catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ProductFilter {
    /// Free-text query, matched case-insensitively as a substring of the
    /// product name.
    pub query: Option<String>,

    /// Metal slug (e.g. "gold", "one-gram-gold"), exact match.
    pub metal: Option<String>,

    /// Sub-category slug, exact match (with the necksets/necklaces alias).
    pub category: Option<String>,

    /// Purity label, exact match (e.g. "22K").
    pub purity: Option<String>,

    /// Inclusive price ceiling. The lower bound is fixed at zero.
    pub max_price: Option<Money>,
}

impl ProductFilter {
    /// Checks whether a product satisfies every active predicate.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(query) = active(&self.query) {
            if !product
                .name
                .to_lowercase()
                .contains(&query.to_lowercase())
            {
                return false;
            }
        }

        if let Some(metal) = active(&self.metal) {
            if product.metal.slug() != metal {
                return false;
            }
        }

        if let Some(category) = active(&self.category) {
            if !category_matches(category, &product.category) {
                return false;
            }
        }

        if let Some(purity) = active(&self.purity) {
            if product.purity != purity {
                return false;
            }
        }

        if let Some(max_price) = self.max_price {
            if product.price() > max_price {
                return false;
            }
        }

        true
    }

    /// Convenience constructor for a metal filter.
    pub fn for_metal(metal: Metal) -> Self {
        ProductFilter {
            metal: Some(metal.slug().to_string()),
            ..ProductFilter::default()
        }
    }
}

/// Treats `None` and the empty string the same way: no constraint.
fn active(value: &Option<String>) -> Option<&str> {
    match value.as_deref() {
        Some("") | None => None,
        Some(v) => Some(v),
    }
}

/// Exact sub-category match, except that "necksets" and "necklaces" are
/// interchangeable in both directions.
fn category_matches(selected: &str, category: &str) -> bool {
    if selected == category {
        return true;
    }
    let aliased = |s: &str| s == "necksets" || s == "necklaces";
    aliased(selected) && aliased(category)
}

// =============================================================================
// Sort Keys
// =============================================================================

/// Ordering applied after filtering.
///
/// Every sort is stable: ties retain the catalog's natural order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SortKey {
    /// Catalog natural order (no reordering).
    Relevance,
    /// Numeric price, ascending.
    PriceAsc,
    /// Numeric price, descending.
    PriceDesc,
    /// Rating, descending.
    Rating,
    /// `is_new` products first.
    ///
    /// This is a boolean partition, not a true recency sort: products carry
    /// no creation timestamp, so "newest" can only mean "flagged new". If
    /// chronological ordering is ever wanted, add a timestamp field rather
    /// than inferring order from the flag.
    Newest,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Relevance
    }
}

/// Sorts a filtered result list in place.
pub(crate) fn sort_products(products: &mut [Product], sort: SortKey) {
    match sort {
        SortKey::Relevance => {}
        SortKey::PriceAsc => products.sort_by_key(|p| p.price_rupees),
        SortKey::PriceDesc => {
            products.sort_by_key(|p| std::cmp::Reverse(p.price_rupees))
        }
        SortKey::Rating => {
            products.sort_by(|a, b| b.rating.total_cmp(&a.rating))
        }
        SortKey::Newest => products.sort_by_key(|p| !p.is_new),
    }
}

/// Derives a display list: filter, then sort. Never mutates the input.
pub fn apply(products: &[Product], filter: &ProductFilter, sort: SortKey) -> Vec<Product> {
    let mut result: Vec<Product> = products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();
    sort_products(&mut result, sort);
    result
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, price: i64, metal: Metal, category: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price_rupees: price,
            original_price_rupees: None,
            image: format!("{}.jpg", id),
            images: vec![],
            category: category.to_string(),
            metal,
            purity: "22K".to_string(),
            weight: "5g".to_string(),
            description: String::new(),
            rating: 4.0,
            review_count: 1,
            is_new: false,
            is_bestseller: false,
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("1", "Rose Gold Bracelet", 45_999, Metal::Gold, "bangles"),
            product("2", "Solitaire Pendant", 32_999, Metal::Gold, "necklaces"),
            product("3", "Temple Neckset", 2_999, Metal::OneGramGold, "necksets"),
            product("4", "Platinum Band", 67_999, Metal::Platinum, "rings"),
            product("5", "Gold Solitaire Ring", 89_999, Metal::Gold, "rings"),
        ]
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let catalog = fixture();
        let result = apply(&catalog, &ProductFilter::default(), SortKey::Relevance);
        assert_eq!(result.len(), catalog.len());
        // Relevance keeps catalog natural order
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let catalog = fixture();
        let filter = ProductFilter {
            query: Some("SOLITAIRE".to_string()),
            ..ProductFilter::default()
        };
        let result = apply(&catalog, &filter, SortKey::Relevance);
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["2", "5"]);
    }

    #[test]
    fn test_empty_string_imposes_no_constraint() {
        let catalog = fixture();
        let filter = ProductFilter {
            query: Some(String::new()),
            metal: Some(String::new()),
            category: Some(String::new()),
            purity: Some(String::new()),
            max_price: None,
        };
        assert_eq!(apply(&catalog, &filter, SortKey::Relevance).len(), 5);
    }

    #[test]
    fn test_metal_and_category_are_conjunctive() {
        let catalog = fixture();
        let filter = ProductFilter {
            metal: Some("gold".to_string()),
            category: Some("rings".to_string()),
            ..ProductFilter::default()
        };
        let result = apply(&catalog, &filter, SortKey::Relevance);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "5");
        assert!(result
            .iter()
            .all(|p| p.metal == Metal::Gold && p.category == "rings"));
    }

    #[test]
    fn test_metal_slug_with_spaces() {
        let catalog = fixture();
        let filter = ProductFilter {
            metal: Some("one-gram-gold".to_string()),
            ..ProductFilter::default()
        };
        let result = apply(&catalog, &filter, SortKey::Relevance);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "3");
    }

    #[test]
    fn test_necksets_and_necklaces_are_interchangeable() {
        let catalog = fixture();

        let necksets = ProductFilter {
            category: Some("necksets".to_string()),
            ..ProductFilter::default()
        };
        let ids: Vec<String> = apply(&catalog, &necksets, SortKey::Relevance)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["2", "3"]);

        let necklaces = ProductFilter {
            category: Some("necklaces".to_string()),
            ..ProductFilter::default()
        };
        let ids: Vec<String> = apply(&catalog, &necklaces, SortKey::Relevance)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["2", "3"]);
    }

    #[test]
    fn test_price_ceiling_is_inclusive() {
        let catalog = fixture();
        let filter = ProductFilter {
            max_price: Some(Money::from_rupees(32_999)),
            ..ProductFilter::default()
        };
        let ids: Vec<String> = apply(&catalog, &filter, SortKey::Relevance)
            .into_iter()
            .map(|p| p.id)
            .collect();
        // 32,999 itself passes (inclusive bound)
        assert_eq!(ids, ["2", "3"]);
    }

    #[test]
    fn test_price_sorts() {
        let catalog = vec![
            product("a", "A", 500, Metal::Gold, "rings"),
            product("b", "B", 100, Metal::Gold, "rings"),
            product("c", "C", 300, Metal::Gold, "rings"),
        ];

        let asc = apply(&catalog, &ProductFilter::default(), SortKey::PriceAsc);
        let prices: Vec<i64> = asc.iter().map(|p| p.price_rupees).collect();
        assert_eq!(prices, [100, 300, 500]);

        let desc = apply(&catalog, &ProductFilter::default(), SortKey::PriceDesc);
        let prices: Vec<i64> = desc.iter().map(|p| p.price_rupees).collect();
        assert_eq!(prices, [500, 300, 100]);
    }

    #[test]
    fn test_price_sort_ties_keep_input_order() {
        let catalog = vec![
            product("first", "A", 300, Metal::Gold, "rings"),
            product("second", "B", 300, Metal::Gold, "rings"),
            product("cheap", "C", 100, Metal::Gold, "rings"),
        ];
        let asc = apply(&catalog, &ProductFilter::default(), SortKey::PriceAsc);
        let ids: Vec<&str> = asc.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["cheap", "first", "second"]);
    }

    #[test]
    fn test_rating_sort_descending() {
        let mut catalog = fixture();
        catalog[0].rating = 4.9;
        catalog[1].rating = 3.5;
        catalog[2].rating = 5.0;
        catalog[3].rating = 4.9;
        catalog[4].rating = 4.0;

        let result = apply(&catalog, &ProductFilter::default(), SortKey::Rating);
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        // 1 and 4 tie at 4.9; catalog order between them is preserved
        assert_eq!(ids, ["3", "1", "4", "5", "2"]);
    }

    #[test]
    fn test_newest_is_a_stable_partition() {
        let mut catalog = fixture();
        catalog[2].is_new = true;
        catalog[4].is_new = true;

        let result = apply(&catalog, &ProductFilter::default(), SortKey::Newest);
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        // New arrivals first (in catalog order), the rest after (in order)
        assert_eq!(ids, ["3", "5", "1", "2", "4"]);
    }

    #[test]
    fn test_sort_key_wire_format() {
        let json = serde_json::to_string(&SortKey::PriceAsc).unwrap();
        assert_eq!(json, "\"price-asc\"");
        let back: SortKey = serde_json::from_str("\"newest\"").unwrap();
        assert_eq!(back, SortKey::Newest);
    }
}
