use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Standardized error response model
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error type or category
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Response model for health check endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}
