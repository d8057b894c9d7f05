use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::BootstrapSettings;
use crate::services::QrService;
use crate::stores::{CatalogStore, OfferStore, ReviewStore, ViewStore};

/// Centralized application data following the main-owned stores pattern
///
/// All stores and services are created once in main.rs and shared across
/// the API implementations, keeping their constructor signatures stable.
pub struct AppData {
    pub db: DatabaseConnection,
    pub settings: BootstrapSettings,
    pub catalog_store: Arc<CatalogStore>,
    pub offer_store: Arc<OfferStore>,
    pub review_store: Arc<ReviewStore>,
    pub view_store: Arc<ViewStore>,
    pub qr_service: Arc<QrService>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The database connection should be established and migrated before
    /// calling this.
    pub fn init(db: DatabaseConnection, settings: BootstrapSettings) -> Self {
        tracing::debug!("Creating stores and services...");

        let catalog_store = Arc::new(CatalogStore::new(db.clone()));
        let offer_store = Arc::new(OfferStore::new(db.clone()));
        let review_store = Arc::new(ReviewStore::new(db.clone()));
        let view_store = Arc::new(ViewStore::new(db.clone()));

        let qr_service = Arc::new(QrService::new(
            settings.public_base_url(),
            settings.qr_batch_limit(),
        ));

        tracing::debug!("Stores and services created");

        Self {
            db,
            settings,
            catalog_store,
            offer_store,
            review_store,
            view_store,
            qr_service,
        }
    }
}
