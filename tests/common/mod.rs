// Common test utilities for integration tests

use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

use catalog_backend::types::db::{category, offer, product, review};

/// Creates a test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

pub async fn seed_category(db: &DatabaseConnection, name: &str) -> category::Model {
    category::ActiveModel {
        name: Set(name.to_string()),
        description: Set(String::new()),
        created_at: Set(Utc::now().timestamp()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to seed category")
}

pub async fn seed_product(
    db: &DatabaseConnection,
    name: &str,
    category_id: Option<i32>,
    price: f64,
    available: bool,
) -> product::Model {
    let now = Utc::now().timestamp();
    product::ActiveModel {
        name: Set(name.to_string()),
        category_id: Set(category_id),
        price: Set(price),
        rack_no: Set("R1".to_string()),
        floor: Set("1".to_string()),
        location: Set(String::new()),
        description: Set(String::new()),
        image_path: Set(None),
        available: Set(available),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to seed product")
}

pub async fn seed_product_with_description(
    db: &DatabaseConnection,
    name: &str,
    description: &str,
) -> product::Model {
    let now = Utc::now().timestamp();
    product::ActiveModel {
        name: Set(name.to_string()),
        category_id: Set(None),
        price: Set(9.99),
        rack_no: Set(String::new()),
        floor: Set("1".to_string()),
        location: Set(String::new()),
        description: Set(description.to_string()),
        image_path: Set(None),
        available: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to seed product")
}

pub async fn seed_offer(
    db: &DatabaseConnection,
    product_id: i32,
    title: &str,
    discount_percent: i32,
    valid_until: i64,
) -> offer::Model {
    offer::ActiveModel {
        product_id: Set(product_id),
        title: Set(title.to_string()),
        discount_percent: Set(discount_percent),
        valid_until: Set(valid_until),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to seed offer")
}

pub async fn seed_review(
    db: &DatabaseConnection,
    product_id: i32,
    name: &str,
    rating: i16,
    comment: &str,
    created_at: i64,
) -> review::Model {
    review::ActiveModel {
        product_id: Set(product_id),
        name: Set(name.to_string()),
        rating: Set(rating),
        comment: Set(comment.to_string()),
        created_at: Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to seed review")
}
