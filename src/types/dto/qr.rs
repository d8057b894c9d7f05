use poem_openapi::payload::{Attachment, Binary, Json};
use poem_openapi::{ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::services::qr_service::BatchQrEntry;
use crate::types::db::product;
use crate::types::dto::common::ErrorResponse;

/// Request model for batch QR generation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct BatchQrRequest {
    /// Ids of the products to generate QR codes for
    pub product_ids: Vec<i32>,
}

/// One generated QR code of a batch
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct QrCodeDto {
    pub id: i32,

    pub name: String,

    /// Base64-encoded PNG image
    pub qr_code: String,
}

impl From<BatchQrEntry> for QrCodeDto {
    fn from(entry: BatchQrEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            qr_code: entry.qr_code,
        }
    }
}

/// Response model for batch QR generation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct BatchQrResponse {
    /// Generated codes, in catalog query order; unknown ids are omitted
    pub qr_codes: Vec<QrCodeDto>,
}

/// A product available for batch selection
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ProductOptionDto {
    pub id: i32,

    pub name: String,
}

impl From<product::Model> for ProductOptionDto {
    fn from(p: product::Model) -> Self {
        Self {
            id: p.id,
            name: p.name,
        }
    }
}

/// Response model for the batch selection listing
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct BatchFormResponse {
    /// Currently available products, in name order
    pub products: Vec<ProductOptionDto>,
}

/// API response for the inline product QR endpoint
#[derive(ApiResponse)]
pub enum ProductQrApiResponse {
    /// QR code as an inline PNG
    #[oai(status = 200, content_type = "image/png")]
    Ok(Binary<Vec<u8>>),

    /// Unknown product id
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Lookup or encoding failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for the downloadable product QR endpoint
#[derive(ApiResponse)]
pub enum QrDownloadApiResponse {
    /// QR code as a PNG attachment with a sanitized filename
    #[oai(status = 200)]
    Ok(Attachment<Vec<u8>>),

    /// Unknown product id
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Lookup or encoding failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for batch QR generation
#[derive(ApiResponse)]
pub enum BatchQrApiResponse {
    /// Generated QR codes for all resolved products
    #[oai(status = 200)]
    Ok(Json<BatchQrResponse>),

    /// Empty or oversized selection
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Lookup or encoding failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for the batch selection listing
#[derive(ApiResponse)]
pub enum BatchFormApiResponse {
    /// Available products for building a selection
    #[oai(status = 200)]
    Ok(Json<BatchFormResponse>),

    /// Catalog lookup failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}
