//! # Catalog Store
//!
//! The fixed in-memory collection of all sellable products.
//!
//! ## Ownership
//! The catalog owns its products exclusively. Views (and the session store)
//! receive clones or borrows; nothing outside this type mutates a product
//! after load. There is no persistence behind it by design — the embedding
//! application supplies the product list once at startup.

use lumiere_core::Product;

use crate::filter::{self, ProductFilter, SortKey};

/// Source of truth for all listing and detail views.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from a loaded product list.
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products, in catalog natural order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Derives a display list for the given filter and sort.
    ///
    /// Recomputed fresh on every call; the catalog itself is never mutated.
    pub fn search(&self, filter: &ProductFilter, sort: SortKey) -> Vec<Product> {
        filter::apply(&self.products, filter, sort)
    }
}
