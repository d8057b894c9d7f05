use std::sync::Arc;

use poem::Request;
use poem_openapi::param::{Path, Query};
use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::api::helpers::{
    extract_ip_address, extract_referrer, extract_user_agent, internal_error, not_found,
};
use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::stores::{ProductListFilter, ProductSort};
use crate::types::dto::products::{
    CategoryDto, CreateReviewApiResponse, CreateReviewRequest, OfferDto, ProductDetailApiResponse,
    ProductDetailResponse, ProductDto, ProductListApiResponse, ProductListResponse, ReviewDto,
};

/// Number of categories surfaced as "popular" on the listing
const POPULAR_CATEGORY_COUNT: usize = 5;

/// Catalog browsing API
pub struct ProductsApi {
    app_data: Arc<AppData>,
}

impl ProductsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

/// API tags for catalog endpoints
#[derive(Tags)]
enum ApiTags {
    /// Product browsing and reviews
    Products,
}

#[OpenApi(prefix_path = "/products")]
impl ProductsApi {
    /// List products with search, category filter and pagination
    ///
    /// Only available products are listed, 20 per page. `q` matches name,
    /// description or category name; `sort` is one of name/price/newest.
    #[oai(path = "/", method = "get", tag = "ApiTags::Products")]
    async fn list_products(
        &self,
        q: Query<Option<String>>,
        category: Query<Option<i32>>,
        sort: Query<Option<String>>,
        page: Query<Option<u64>>,
    ) -> ProductListApiResponse {
        let filter = ProductListFilter {
            query: q.0,
            category_id: category.0,
            sort: ProductSort::from_param(sort.0.as_deref()),
            page: page.0.unwrap_or(1),
        };

        let product_page = match self.app_data.catalog_store.list_products(&filter).await {
            Ok(page) => page,
            Err(e) => return ProductListApiResponse::InternalServerError(Json(internal_error(&e))),
        };

        let categories = match self.app_data.catalog_store.categories_with_counts().await {
            Ok(categories) => categories,
            Err(e) => return ProductListApiResponse::InternalServerError(Json(internal_error(&e))),
        };

        let mut popular = categories.clone();
        popular.sort_by(|a, b| b.product_count.cmp(&a.product_count));
        popular.truncate(POPULAR_CATEGORY_COUNT);

        ProductListApiResponse::Ok(Json(ProductListResponse {
            products: product_page.products.into_iter().map(ProductDto::from).collect(),
            total: product_page.total as i64,
            page: product_page.page as i64,
            pages: product_page.pages as i64,
            per_page: product_page.per_page as i64,
            categories: categories.into_iter().map(CategoryDto::from).collect(),
            popular_categories: popular.into_iter().map(CategoryDto::from).collect(),
        }))
    }

    /// Product detail with offers, reviews and an embedded QR code
    ///
    /// Each call records a detail-page view (client IP, user agent,
    /// referrer); tracking failures are logged and never fail the request.
    #[oai(path = "/:id", method = "get", tag = "ApiTags::Products")]
    async fn product_detail(&self, req: &Request, id: Path<i32>) -> ProductDetailApiResponse {
        let (product, category) = match self.app_data.catalog_store.get_product(id.0).await {
            Ok(Some(found)) => found,
            Ok(None) => {
                return ProductDetailApiResponse::NotFound(Json(not_found("Product not found")))
            }
            Err(e) => {
                return ProductDetailApiResponse::InternalServerError(Json(internal_error(&e)))
            }
        };

        if let Err(e) = self
            .app_data
            .view_store
            .record(
                product.id,
                extract_ip_address(req),
                extract_user_agent(req),
                extract_referrer(req),
            )
            .await
        {
            tracing::warn!("Failed to record product view: {e}");
        }

        let offers = match self.app_data.offer_store.list_for_product(product.id).await {
            Ok(offers) => offers,
            Err(e) => {
                return ProductDetailApiResponse::InternalServerError(Json(internal_error(&e)))
            }
        };

        let reviews = match self.app_data.review_store.list_for_product(product.id).await {
            Ok(reviews) => reviews,
            Err(e) => {
                return ProductDetailApiResponse::InternalServerError(Json(internal_error(&e)))
            }
        };

        let qr_code = match self.app_data.qr_service.render_product_base64(product.id) {
            Ok(qr_code) => qr_code,
            Err(e) => {
                return ProductDetailApiResponse::InternalServerError(Json(internal_error(
                    &InternalError::from(e),
                )))
            }
        };

        ProductDetailApiResponse::Ok(Json(ProductDetailResponse {
            product: ProductDto::from((product, category)),
            offers: offers.into_iter().map(OfferDto::from).collect(),
            reviews: reviews.into_iter().map(ReviewDto::from).collect(),
            qr_code,
        }))
    }

    /// Submit a review for a product
    #[oai(path = "/:id/reviews", method = "post", tag = "ApiTags::Products")]
    async fn create_review(
        &self,
        id: Path<i32>,
        body: Json<CreateReviewRequest>,
    ) -> CreateReviewApiResponse {
        match self.app_data.catalog_store.get_product(id.0).await {
            Ok(Some(_)) => {}
            Ok(None) => return CreateReviewApiResponse::NotFound(Json(not_found("Product not found"))),
            Err(e) => return CreateReviewApiResponse::InternalServerError(Json(internal_error(&e))),
        }

        let review = match self
            .app_data
            .review_store
            .create(id.0, body.0.name, body.0.rating as i16, body.0.comment)
            .await
        {
            Ok(review) => review,
            Err(e) => return CreateReviewApiResponse::InternalServerError(Json(internal_error(&e))),
        };

        CreateReviewApiResponse::Created(Json(ReviewDto::from(review)))
    }
}
