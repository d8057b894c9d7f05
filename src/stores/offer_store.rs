use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::errors::InternalError;
use crate::types::db::offer;

/// Read access to time-bound discount offers
pub struct OfferStore {
    db: DatabaseConnection,
}

impl OfferStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All offers attached to a product, soonest expiry first
    pub async fn list_for_product(&self, product_id: i32) -> Result<Vec<offer::Model>, InternalError> {
        offer::Entity::find()
            .filter(offer::Column::ProductId.eq(product_id))
            .order_by_asc(offer::Column::ValidUntil)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_offers", e))
    }
}
