mod common;

use catalog_backend::stores::ViewStore;
use catalog_backend::types::db::product_view;
use common::{seed_product, setup_test_db};
use sea_orm::EntityTrait;

#[tokio::test]
async fn test_record_view_with_full_client_info() {
    let db = setup_test_db().await;
    let store = ViewStore::new(db.clone());
    let product = seed_product(&db, "Widget", None, 5.0, true).await;

    store
        .record(
            product.id,
            Some("192.168.1.1".to_string()),
            Some("Mozilla/5.0".to_string()),
            Some("http://example.com".to_string()),
        )
        .await
        .unwrap();

    let views = product_view::Entity::find().all(&db).await.unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].product_id, product.id);
    assert_eq!(views[0].ip_address, "192.168.1.1");
    assert_eq!(views[0].user_agent, "Mozilla/5.0");
    assert_eq!(views[0].referrer.as_deref(), Some("http://example.com"));
    assert!(views[0].viewed_at > 0);
}

#[tokio::test]
async fn test_record_view_with_missing_client_info() {
    let db = setup_test_db().await;
    let store = ViewStore::new(db.clone());
    let product = seed_product(&db, "Widget", None, 5.0, true).await;

    store.record(product.id, None, None, None).await.unwrap();

    let views = product_view::Entity::find().all(&db).await.unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].ip_address, "");
    assert_eq!(views[0].user_agent, "");
    assert_eq!(views[0].referrer, None);
}
