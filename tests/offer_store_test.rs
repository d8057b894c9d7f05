mod common;

use catalog_backend::stores::OfferStore;
use common::{seed_offer, seed_product, setup_test_db};

#[tokio::test]
async fn test_list_for_product_soonest_expiry_first() {
    let db = setup_test_db().await;
    let store = OfferStore::new(db.clone());
    let product = seed_product(&db, "Widget", None, 5.0, true).await;
    let other = seed_product(&db, "Other", None, 5.0, true).await;

    seed_offer(&db, product.id, "Late deal", 10, 2_000).await;
    seed_offer(&db, product.id, "Flash sale", 25, 1_000).await;
    seed_offer(&db, other.id, "Unrelated", 50, 500).await;

    let offers = store.list_for_product(product.id).await.unwrap();

    assert_eq!(offers.len(), 2);
    assert_eq!(offers[0].title, "Flash sale");
    assert_eq!(offers[0].discount_percent, 25);
    assert_eq!(offers[1].title, "Late deal");
}

#[tokio::test]
async fn test_list_for_product_without_offers_is_empty() {
    let db = setup_test_db().await;
    let store = OfferStore::new(db.clone());
    let product = seed_product(&db, "Widget", None, 5.0, true).await;

    assert!(store.list_for_product(product.id).await.unwrap().is_empty());
}
