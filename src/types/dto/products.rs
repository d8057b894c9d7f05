use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::stores::CategoryWithCount;
use crate::types::db::{category, offer, product, review};
use crate::types::dto::common::ErrorResponse;

/// A product as exposed by the listing and detail endpoints
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: i32,

    pub name: String,

    /// Category id, when the product is assigned to one
    pub category_id: Option<i32>,

    /// Category display name, when the product is assigned to one
    pub category: Option<String>,

    pub price: f64,

    pub rack_no: String,

    pub floor: String,

    pub location: String,

    pub description: String,

    /// Relative path of the product image, when one was uploaded
    pub image_path: Option<String>,

    pub available: bool,

    /// Creation time (unix seconds)
    pub created_at: i64,

    /// Last modification time (unix seconds)
    pub updated_at: i64,
}

impl From<(product::Model, Option<category::Model>)> for ProductDto {
    fn from((p, c): (product::Model, Option<category::Model>)) -> Self {
        Self {
            id: p.id,
            name: p.name,
            category_id: p.category_id,
            category: c.map(|c| c.name),
            price: p.price,
            rack_no: p.rack_no,
            floor: p.floor,
            location: p.location,
            description: p.description,
            image_path: p.image_path,
            available: p.available,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// A category with its product count (filter dropdown data)
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: i32,

    pub name: String,

    /// Number of products assigned to the category
    pub product_count: i64,
}

impl From<CategoryWithCount> for CategoryDto {
    fn from(c: CategoryWithCount) -> Self {
        Self {
            id: c.id,
            name: c.name,
            product_count: c.product_count,
        }
    }
}

/// Response model for the paginated product listing
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ProductListResponse {
    /// Products on the requested page
    pub products: Vec<ProductDto>,

    /// Total number of products matching the filters
    pub total: i64,

    /// 1-based page number
    pub page: i64,

    /// Total number of pages
    pub pages: i64,

    /// Page size
    pub per_page: i64,

    /// All non-empty categories, for the filter dropdown
    pub categories: Vec<CategoryDto>,

    /// Top categories by product count
    pub popular_categories: Vec<CategoryDto>,
}

/// A discount offer attached to a product
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct OfferDto {
    pub id: i32,

    pub title: String,

    pub discount_percent: i32,

    /// Last day the offer is valid (unix seconds)
    pub valid_until: i64,
}

impl From<offer::Model> for OfferDto {
    fn from(o: offer::Model) -> Self {
        Self {
            id: o.id,
            title: o.title,
            discount_percent: o.discount_percent,
            valid_until: o.valid_until,
        }
    }
}

/// A user review of a product
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ReviewDto {
    pub id: i32,

    /// Reviewer display name ("Anonymous" when not provided)
    pub name: String,

    /// Star rating, 1 to 5
    pub rating: i32,

    pub comment: String,

    /// Submission time (unix seconds)
    pub created_at: i64,
}

impl From<review::Model> for ReviewDto {
    fn from(r: review::Model) -> Self {
        Self {
            id: r.id,
            name: r.name,
            rating: r.rating as i32,
            comment: r.comment,
            created_at: r.created_at,
        }
    }
}

/// Response model for the product detail page
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ProductDetailResponse {
    pub product: ProductDto,

    pub offers: Vec<OfferDto>,

    pub reviews: Vec<ReviewDto>,

    /// Base64-encoded PNG QR code for the product's canonical URL
    pub qr_code: String,
}

/// Request model for submitting a review
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateReviewRequest {
    /// Reviewer display name; "Anonymous" when omitted
    pub name: Option<String>,

    /// Star rating, 1 to 5
    #[oai(validator(minimum(value = "1"), maximum(value = "5")))]
    pub rating: u8,

    /// Review text
    pub comment: String,
}

/// Response model for search suggestions
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    /// Product name and category suggestions, at most 8
    pub suggestions: Vec<String>,
}

/// API response for the product listing endpoint
#[derive(ApiResponse)]
pub enum ProductListApiResponse {
    /// Page of products with filter metadata
    #[oai(status = 200)]
    Ok(Json<ProductListResponse>),

    /// Catalog lookup failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for the product detail endpoint
#[derive(ApiResponse)]
pub enum ProductDetailApiResponse {
    /// Product with offers, reviews and embedded QR code
    #[oai(status = 200)]
    Ok(Json<ProductDetailResponse>),

    /// Unknown product id
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Catalog lookup or QR encoding failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for review submission
#[derive(ApiResponse)]
pub enum CreateReviewApiResponse {
    /// Review stored
    #[oai(status = 201)]
    Created(Json<ReviewDto>),

    /// Unknown product id
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Storing the review failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for search suggestions
#[derive(ApiResponse)]
pub enum SuggestionsApiResponse {
    /// Suggestion list (possibly empty)
    #[oai(status = 200)]
    Ok(Json<SuggestionsResponse>),

    /// Catalog lookup failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}
