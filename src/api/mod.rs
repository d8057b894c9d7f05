// API layer - HTTP endpoints
pub mod health;
pub mod helpers;
pub mod products;
pub mod qr;
pub mod search;

pub use health::HealthApi;
pub use products::ProductsApi;
pub use qr::QrApi;
pub use search::SearchApi;

#[cfg(test)]
mod helpers_test;
