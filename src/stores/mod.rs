// Stores layer - Data access and repository pattern
pub mod catalog_store;
pub mod offer_store;
pub mod review_store;
pub mod view_store;

pub use catalog_store::{CatalogStore, CategoryWithCount, ProductListFilter, ProductPage, ProductSort};
pub use offer_store::OfferStore;
pub use review_store::ReviewStore;
pub use view_store::ViewStore;
