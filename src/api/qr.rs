use std::sync::Arc;

use poem_openapi::param::{Path, Query};
use poem_openapi::payload::{Attachment, AttachmentType, Binary, Json};
use poem_openapi::{OpenApi, Tags};

use crate::api::helpers::{bad_request, internal_error, not_found};
use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::services::qr_service::{QrService, QrStyle, DEFAULT_BORDER, DEFAULT_BOX_SIZE};
use crate::types::dto::qr::{
    BatchFormApiResponse, BatchFormResponse, BatchQrApiResponse, BatchQrRequest, BatchQrResponse,
    ProductOptionDto, ProductQrApiResponse, QrCodeDto, QrDownloadApiResponse,
};

/// QR image API
pub struct QrApi {
    app_data: Arc<AppData>,
}

impl QrApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

/// API tags for QR endpoints
#[derive(Tags)]
enum ApiTags {
    /// QR code generation
    Qr,
}

#[OpenApi(prefix_path = "/qr")]
impl QrApi {
    /// Inline QR code for a product's canonical URL
    ///
    /// Error correction is fixed at level M, colors at black on white;
    /// only module size and quiet-zone width are adjustable.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Qr")]
    async fn product_qr(
        &self,
        id: Path<i32>,
        size: Query<Option<u32>>,
        border: Query<Option<u32>>,
    ) -> ProductQrApiResponse {
        let product = match self.app_data.catalog_store.get_product(id.0).await {
            Ok(Some((product, _))) => product,
            Ok(None) => return ProductQrApiResponse::NotFound(Json(not_found("Product not found"))),
            Err(e) => return ProductQrApiResponse::InternalServerError(Json(internal_error(&e))),
        };

        let style = QrStyle::with_dimensions(
            size.0.unwrap_or(DEFAULT_BOX_SIZE),
            border.0.unwrap_or(DEFAULT_BORDER),
        );

        match self.app_data.qr_service.render_product(product.id, &style) {
            Ok(png) => ProductQrApiResponse::Ok(Binary(png)),
            Err(e) => ProductQrApiResponse::InternalServerError(Json(internal_error(
                &InternalError::from(e),
            ))),
        }
    }

    /// Downloadable QR code with color customization
    ///
    /// `fill_color` and `back_color` accept CSS-style names or hex values;
    /// unresolvable colors degrade to the default black/white pair instead
    /// of failing. The attachment filename is the sanitized product name.
    #[oai(path = "/products/:id/download", method = "get", tag = "ApiTags::Qr")]
    async fn product_qr_download(
        &self,
        id: Path<i32>,
        size: Query<Option<u32>>,
        border: Query<Option<u32>>,
        fill_color: Query<Option<String>>,
        back_color: Query<Option<String>>,
    ) -> QrDownloadApiResponse {
        let product = match self.app_data.catalog_store.get_product(id.0).await {
            Ok(Some((product, _))) => product,
            Ok(None) => return QrDownloadApiResponse::NotFound(Json(not_found("Product not found"))),
            Err(e) => return QrDownloadApiResponse::InternalServerError(Json(internal_error(&e))),
        };

        let style = QrStyle::with_dimensions(
            size.0.unwrap_or(DEFAULT_BOX_SIZE),
            border.0.unwrap_or(DEFAULT_BORDER),
        )
        .with_colors(fill_color.0.as_deref(), back_color.0.as_deref());

        let png = match self.app_data.qr_service.render_product(product.id, &style) {
            Ok(png) => png,
            Err(e) => {
                return QrDownloadApiResponse::InternalServerError(Json(internal_error(
                    &InternalError::from(e),
                )))
            }
        };

        let filename = QrService::attachment_filename(&product.name);
        QrDownloadApiResponse::Ok(
            Attachment::new(png)
                .attachment_type(AttachmentType::Attachment)
                .filename(filename),
        )
    }

    /// Generate QR codes for a set of products
    ///
    /// Unknown ids are dropped without error; an empty or oversized
    /// selection is rejected. Entries follow the catalog query order.
    #[oai(path = "/batch", method = "post", tag = "ApiTags::Qr")]
    async fn batch_qr(&self, body: Json<BatchQrRequest>) -> BatchQrApiResponse {
        if let Err(e) = self.app_data.qr_service.check_selection(body.0.product_ids.len()) {
            return BatchQrApiResponse::BadRequest(Json(bad_request(e.to_string())));
        }

        let products = match self
            .app_data
            .catalog_store
            .get_products_by_ids(&body.0.product_ids)
            .await
        {
            Ok(products) => products,
            Err(e) => return BatchQrApiResponse::InternalServerError(Json(internal_error(&e))),
        };

        match self.app_data.qr_service.render_batch(&products) {
            Ok(entries) => BatchQrApiResponse::Ok(Json(BatchQrResponse {
                qr_codes: entries.into_iter().map(QrCodeDto::from).collect(),
            })),
            Err(e) => BatchQrApiResponse::InternalServerError(Json(internal_error(
                &InternalError::from(e),
            ))),
        }
    }

    /// Products available for batch selection
    #[oai(path = "/batch", method = "get", tag = "ApiTags::Qr")]
    async fn batch_form(&self) -> BatchFormApiResponse {
        match self.app_data.catalog_store.available_products().await {
            Ok(products) => BatchFormApiResponse::Ok(Json(BatchFormResponse {
                products: products.into_iter().map(ProductOptionDto::from).collect(),
            })),
            Err(e) => BatchFormApiResponse::InternalServerError(Json(internal_error(&e))),
        }
    }
}
