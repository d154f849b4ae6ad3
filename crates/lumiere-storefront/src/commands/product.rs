//! # Product Commands
//!
//! Listing (filter + sort) and detail lookup.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::ApiError;
use lumiere_catalog::{Catalog, ProductFilter, SortKey};
use lumiere_core::validation::validate_search_query;
use lumiere_core::{Metal, Product};

/// Product DTO (Data Transfer Object) for the frontend.
///
/// ## Why a DTO?
/// - Decouples the internal domain model from the API contract
/// - Adds derived display fields (`discount_percent`)
/// - Handles serde rename to camelCase for JS consumption
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub original_price: Option<i64>,
    /// Rounded percentage saved against the original price, when on offer.
    pub discount_percent: Option<u32>,
    pub image: String,
    pub images: Vec<String>,
    pub category: String,
    pub metal: Metal,
    pub purity: String,
    pub weight: String,
    pub description: String,
    pub rating: f32,
    pub review_count: u32,
    pub is_new: bool,
    pub is_bestseller: bool,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        let discount_percent = p.discount_percent();
        ProductDto {
            id: p.id,
            name: p.name,
            price: p.price_rupees,
            original_price: p.original_price_rupees,
            discount_percent,
            image: p.image,
            images: p.images,
            category: p.category,
            metal: p.metal,
            purity: p.purity,
            weight: p.weight,
            description: p.description,
            rating: p.rating,
            review_count: p.review_count,
            is_new: p.is_new,
            is_bestseller: p.is_bestseller,
        }
    }
}

/// Derives the display list for a listing view.
///
/// ## Behavior
/// - The free-text query is trimmed and bounded (over-long input is
///   rejected rather than silently truncated)
/// - All other predicates pass through to the filter engine as-is
/// - Recomputed fresh on every call
pub fn list_products(
    catalog: &Catalog,
    filter: &ProductFilter,
    sort: SortKey,
) -> Result<Vec<ProductDto>, ApiError> {
    debug!(?sort, "list_products command");

    let mut filter = filter.clone();
    if let Some(query) = filter.query.as_deref() {
        filter.query = Some(validate_search_query(query)?);
    }

    Ok(catalog
        .search(&filter, sort)
        .into_iter()
        .map(ProductDto::from)
        .collect())
}

/// Fetches a single product for the detail view.
pub fn get_product(catalog: &Catalog, id: &str) -> Result<ProductDto, ApiError> {
    debug!(product_id = %id, "get_product command");

    catalog
        .get(id)
        .cloned()
        .map(ProductDto::from)
        .ok_or_else(|| ApiError::not_found("Product", id))
}
