//! End-to-end storefront flow: browse, fill a cart, check out as a gift,
//! then follow the order through fulfillment.

use lumiere_catalog::{Catalog, ProductFilter, SortKey};
use lumiere_core::{Metal, OrderStatus, Product};
use lumiere_storefront::commands::{cart, order, product, wishlist};
use lumiere_storefront::logging;
use lumiere_storefront::state::SessionState;

fn product_fixture(id: &str, name: &str, category: &str, metal: Metal, price: i64) -> Product {
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
        weight: "8.2g".to_string(),
        description: String::new(),
        rating: 4.7,
        review_count: 120,
        is_new: false,
        is_bestseller: true,
    }
}

fn catalog_fixture() -> Catalog {
    Catalog::new(vec![
        product_fixture("g1", "Temple Gold Necklace", "necklaces", Metal::Gold, 1_000),
        product_fixture("d1", "Solitaire Diamond Ring", "rings", Metal::Diamond, 2_000),
        product_fixture("s1", "Oxidised Silver Jhumka", "earrings", Metal::Silver, 450),
    ])
}

#[test]
fn shopper_journey_from_browse_to_delivery() {
    logging::init();
    let catalog = catalog_fixture();
    let session = SessionState::new();

    // Browse: case-insensitive search narrows the listing
    let filter = ProductFilter {
        query: Some("necklace".to_string()),
        ..ProductFilter::default()
    };
    let listing = product::list_products(&catalog, &filter, SortKey::Relevance).unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].id, "g1");

    // Save one for later, add two to the cart
    wishlist::toggle_wishlist(&catalog, &session, "s1").unwrap();
    cart::add_to_cart(&catalog, &session, "g1", Some(2)).unwrap();
    let response = cart::add_to_cart(&catalog, &session, "d1", Some(1)).unwrap();

    assert_eq!(response.totals.cart_count, 3);
    assert_eq!(response.totals.cart_total.rupees(), 4_000);

    // Check out as a gift
    let placed = order::checkout(&session, true, Some("With love".to_string())).unwrap();
    assert_eq!(placed.total.rupees(), 4_000);
    assert!(placed.is_gift);
    assert_eq!(placed.status, OrderStatus::Confirmed);

    // Checkout cleared the cart but left the wishlist alone
    assert!(cart::get_cart(&session).items.is_empty());
    assert!(wishlist::is_in_wishlist(&session, "s1"));

    // Later cart activity must not reach into the placed order
    cart::add_to_cart(&catalog, &session, "g1", Some(5)).unwrap();
    let orders = order::list_orders(&session);
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].total.rupees(), 4_000);
    assert_eq!(orders[0].items.len(), 2);

    // Fulfillment: the back office moves the order along the ladder
    order::update_order_status(&session, &placed.id, "Shipped").unwrap();
    let tracking = order::track_order(&session, &placed.id).unwrap();
    assert_eq!(tracking.status, OrderStatus::Shipped);
    assert_eq!(tracking.current_step, 2);
    assert_eq!(tracking.steps.len(), 5);
}

#[test]
fn filter_and_sort_drive_the_listing() {
    logging::init();
    let catalog = catalog_fixture();

    // Metal facet
    let filter = ProductFilter::for_metal(Metal::Silver);
    let listing = product::list_products(&catalog, &filter, SortKey::Relevance).unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].id, "s1");

    // Price ceiling is inclusive, cheapest-first ordering
    let filter = ProductFilter {
        max_price: Some(lumiere_core::Money::from_rupees(2_000)),
        ..ProductFilter::default()
    };
    let listing = product::list_products(&catalog, &filter, SortKey::PriceAsc).unwrap();
    let ids: Vec<&str> = listing.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["s1", "g1", "d1"]);
}
