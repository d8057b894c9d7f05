use std::sync::Arc;

use poem_openapi::param::Query;
use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::api::helpers::internal_error;
use crate::app_data::AppData;
use crate::types::dto::products::{SuggestionsApiResponse, SuggestionsResponse};

/// Search suggestions API
pub struct SearchApi {
    app_data: Arc<AppData>,
}

impl SearchApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

/// API tags for search endpoints
#[derive(Tags)]
enum ApiTags {
    /// Search helpers
    Search,
}

#[OpenApi(prefix_path = "/search")]
impl SearchApi {
    /// Autocomplete suggestions for the catalog search box
    ///
    /// Returns an empty list for queries shorter than two characters.
    #[oai(path = "/suggestions", method = "get", tag = "ApiTags::Search")]
    async fn suggestions(&self, q: Query<Option<String>>) -> SuggestionsApiResponse {
        let query = q.0.unwrap_or_default();

        match self.app_data.catalog_store.search_suggestions(&query).await {
            Ok(suggestions) => {
                SuggestionsApiResponse::Ok(Json(SuggestionsResponse { suggestions }))
            }
            Err(e) => SuggestionsApiResponse::InternalServerError(Json(internal_error(&e))),
        }
    }
}
