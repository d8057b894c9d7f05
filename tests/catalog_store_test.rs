mod common;

use catalog_backend::stores::{CatalogStore, ProductListFilter, ProductSort};
use common::{seed_category, seed_product, seed_product_with_description, setup_test_db};

#[tokio::test]
async fn test_list_excludes_unavailable_products() {
    let db = setup_test_db().await;
    let store = CatalogStore::new(db.clone());

    seed_product(&db, "Visible", None, 10.0, true).await;
    seed_product(&db, "Hidden", None, 10.0, false).await;

    let page = store.list_products(&ProductListFilter::default()).await.unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.products[0].0.name, "Visible");
}

#[tokio::test]
async fn test_search_matches_name_description_and_category() {
    let db = setup_test_db().await;
    let store = CatalogStore::new(db.clone());

    let tools = seed_category(&db, "Tools").await;
    seed_product(&db, "Hammer", Some(tools.id), 12.0, true).await;
    seed_product_with_description(&db, "Mystery box", "contains a hammer").await;
    seed_product(&db, "Socket wrench", Some(tools.id), 25.0, true).await;
    seed_product(&db, "Teapot", None, 8.0, true).await;

    let filter = ProductListFilter {
        query: Some("hammer".to_string()),
        ..Default::default()
    };
    let page = store.list_products(&filter).await.unwrap();
    assert_eq!(page.total, 2, "matches on name and description");

    let filter = ProductListFilter {
        query: Some("Tools".to_string()),
        ..Default::default()
    };
    let page = store.list_products(&filter).await.unwrap();
    assert_eq!(page.total, 2, "matches via category name");
}

#[tokio::test]
async fn test_category_filter_and_joined_category_name() {
    let db = setup_test_db().await;
    let store = CatalogStore::new(db.clone());

    let tools = seed_category(&db, "Tools").await;
    let garden = seed_category(&db, "Garden").await;
    seed_product(&db, "Hammer", Some(tools.id), 12.0, true).await;
    seed_product(&db, "Rake", Some(garden.id), 9.0, true).await;

    let filter = ProductListFilter {
        category_id: Some(tools.id),
        ..Default::default()
    };
    let page = store.list_products(&filter).await.unwrap();

    assert_eq!(page.total, 1);
    let (product, category) = &page.products[0];
    assert_eq!(product.name, "Hammer");
    assert_eq!(category.as_ref().unwrap().name, "Tools");
}

#[tokio::test]
async fn test_pagination_is_twenty_per_page() {
    let db = setup_test_db().await;
    let store = CatalogStore::new(db.clone());

    for i in 0..25 {
        seed_product(&db, &format!("Product {i:02}"), None, 1.0, true).await;
    }

    let page = store.list_products(&ProductListFilter::default()).await.unwrap();
    assert_eq!(page.total, 25);
    assert_eq!(page.pages, 2);
    assert_eq!(page.products.len(), 20);

    let filter = ProductListFilter {
        page: 2,
        ..Default::default()
    };
    let page = store.list_products(&filter).await.unwrap();
    assert_eq!(page.products.len(), 5);
}

#[tokio::test]
async fn test_sort_by_price() {
    let db = setup_test_db().await;
    let store = CatalogStore::new(db.clone());

    seed_product(&db, "Expensive", None, 99.0, true).await;
    seed_product(&db, "Cheap", None, 1.0, true).await;
    seed_product(&db, "Middle", None, 50.0, true).await;

    let filter = ProductListFilter {
        sort: ProductSort::Price,
        ..Default::default()
    };
    let page = store.list_products(&filter).await.unwrap();

    let names: Vec<_> = page.products.iter().map(|(p, _)| p.name.as_str()).collect();
    assert_eq!(names, vec!["Cheap", "Middle", "Expensive"]);
}

#[test]
fn test_sort_param_parsing() {
    assert_eq!(ProductSort::from_param(Some("price")), ProductSort::Price);
    assert_eq!(ProductSort::from_param(Some("newest")), ProductSort::Newest);
    assert_eq!(ProductSort::from_param(Some("garbage")), ProductSort::Name);
    assert_eq!(ProductSort::from_param(None), ProductSort::Name);
}

#[tokio::test]
async fn test_get_products_by_ids_drops_unknown_ids() {
    let db = setup_test_db().await;
    let store = CatalogStore::new(db.clone());

    let a = seed_product(&db, "A", None, 1.0, true).await;
    let b = seed_product(&db, "B", None, 2.0, true).await;

    let products = store.get_products_by_ids(&[a.id, 9999, b.id]).await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, a.id);
    assert_eq!(products[1].id, b.id);

    let empty = store.get_products_by_ids(&[]).await.unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_get_product_returns_none_for_unknown_id() {
    let db = setup_test_db().await;
    let store = CatalogStore::new(db.clone());

    assert!(store.get_product(123).await.unwrap().is_none());
}

#[tokio::test]
async fn test_categories_with_counts_skips_empty_categories() {
    let db = setup_test_db().await;
    let store = CatalogStore::new(db.clone());

    let tools = seed_category(&db, "Tools").await;
    seed_category(&db, "Empty").await;
    seed_product(&db, "Hammer", Some(tools.id), 12.0, true).await;
    seed_product(&db, "Wrench", Some(tools.id), 15.0, true).await;

    let categories = store.categories_with_counts().await.unwrap();

    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Tools");
    assert_eq!(categories[0].product_count, 2);
}

#[tokio::test]
async fn test_available_products_in_name_order() {
    let db = setup_test_db().await;
    let store = CatalogStore::new(db.clone());

    seed_product(&db, "Zebra print", None, 5.0, true).await;
    seed_product(&db, "Anvil", None, 50.0, true).await;
    seed_product(&db, "Hidden", None, 1.0, false).await;

    let products = store.available_products().await.unwrap();

    let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Anvil", "Zebra print"]);
}

#[tokio::test]
async fn test_search_suggestions() {
    let db = setup_test_db().await;
    let store = CatalogStore::new(db.clone());

    let tools = seed_category(&db, "Hand tools").await;
    seed_product(&db, "Hammer", Some(tools.id), 12.0, true).await;
    seed_product_with_description(&db, "Gift set", "a small hammer and nails").await;

    // Too short
    assert!(store.search_suggestions("h").await.unwrap().is_empty());

    let suggestions = store.search_suggestions("hammer").await.unwrap();
    assert_eq!(suggestions, vec!["Hammer".to_string(), "Gift set".to_string()]);

    let suggestions = store.search_suggestions("tool").await.unwrap();
    assert_eq!(suggestions, vec!["Category: Hand tools".to_string()]);
}

#[tokio::test]
async fn test_suggestions_capped_at_eight() {
    let db = setup_test_db().await;
    let store = CatalogStore::new(db.clone());

    for i in 0..7 {
        seed_product(&db, &format!("Widget {i}"), None, 1.0, true).await;
        seed_category(&db, &format!("Widget category {i}")).await;
    }

    let suggestions = store.search_suggestions("widget").await.unwrap();
    assert_eq!(suggestions.len(), 8, "5 products + 3 categories");
}
