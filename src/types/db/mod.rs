// Database entities - SeaORM models
pub mod category;
pub mod offer;
pub mod product;
pub mod product_view;
pub mod review;
