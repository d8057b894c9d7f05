// Services layer - Business logic and orchestration
pub mod qr_service;

pub use qr_service::{BatchSelectionError, ErrorCorrection, QrService, QrStyle};

#[cfg(test)]
mod qr_service_test;
