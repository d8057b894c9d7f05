// API-facing request/response models
pub mod common;
pub mod products;
pub mod qr;

#[cfg(test)]
mod qr_test;
