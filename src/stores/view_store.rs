use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::errors::InternalError;
use crate::types::db::product_view;

/// Write access to detail-page view tracking
pub struct ViewStore {
    db: DatabaseConnection,
}

impl ViewStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Record one detail-page view
    pub async fn record(
        &self,
        product_id: i32,
        ip_address: Option<String>,
        user_agent: Option<String>,
        referrer: Option<String>,
    ) -> Result<(), InternalError> {
        let model = product_view::ActiveModel {
            product_id: Set(product_id),
            ip_address: Set(ip_address.unwrap_or_default()),
            user_agent: Set(user_agent.unwrap_or_default()),
            referrer: Set(referrer),
            viewed_at: Set(Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("record_product_view", e))?;

        Ok(())
    }
}
