use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::errors::InternalError;
use crate::types::db::review;

/// Read and write access to user reviews
pub struct ReviewStore {
    db: DatabaseConnection,
}

impl ReviewStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All reviews for a product, newest first
    pub async fn list_for_product(&self, product_id: i32) -> Result<Vec<review::Model>, InternalError> {
        review::Entity::find()
            .filter(review::Column::ProductId.eq(product_id))
            .order_by_desc(review::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_reviews", e))
    }

    /// Store a submitted review
    ///
    /// Rating is validated at the API boundary (1..=5); a missing reviewer
    /// name is recorded as "Anonymous".
    pub async fn create(
        &self,
        product_id: i32,
        name: Option<String>,
        rating: i16,
        comment: String,
    ) -> Result<review::Model, InternalError> {
        let name = name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "Anonymous".to_string());

        let model = review::ActiveModel {
            product_id: Set(product_id),
            name: Set(name),
            rating: Set(rating),
            comment: Set(comment),
            created_at: Set(Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_review", e))
    }
}
