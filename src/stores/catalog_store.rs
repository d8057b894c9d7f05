use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::config::settings::PRODUCTS_PER_PAGE;
use crate::errors::InternalError;
use crate::types::db::{category, product};

/// Sort order for product listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
    #[default]
    Name,
    Price,
    Newest,
}

impl ProductSort {
    /// Parse the `sort` query parameter, defaulting to name order
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("price") => ProductSort::Price,
            Some("newest") => ProductSort::Newest,
            _ => ProductSort::Name,
        }
    }
}

/// Filter and pagination inputs for a product listing
#[derive(Debug, Clone, Default)]
pub struct ProductListFilter {
    /// Free-text search across product name, description and category name
    pub query: Option<String>,
    pub category_id: Option<i32>,
    pub sort: ProductSort,
    /// 1-based page number
    pub page: u64,
}

/// One page of listed products, each with its category (when set)
#[derive(Debug)]
pub struct ProductPage {
    pub products: Vec<(product::Model, Option<category::Model>)>,
    pub total: u64,
    pub page: u64,
    pub pages: u64,
    pub per_page: u64,
}

/// Category with the number of products assigned to it
#[derive(FromQueryResult, Debug, Clone)]
pub struct CategoryWithCount {
    pub id: i32,
    pub name: String,
    pub product_count: i64,
}

/// Read access to the product catalog
pub struct CatalogStore {
    db: DatabaseConnection,
}

impl CatalogStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List available products with search, category filter and pagination
    pub async fn list_products(
        &self,
        filter: &ProductListFilter,
    ) -> Result<ProductPage, InternalError> {
        let mut query = product::Entity::find().filter(product::Column::Available.eq(true));

        if let Some(q) = filter.query.as_deref().filter(|q| !q.trim().is_empty()) {
            let q = q.trim();
            query = query
                .join(JoinType::LeftJoin, product::Relation::Category.def())
                .filter(
                    Condition::any()
                        .add(product::Column::Name.contains(q))
                        .add(product::Column::Description.contains(q))
                        .add(category::Column::Name.contains(q)),
                );
        }

        if let Some(category_id) = filter.category_id {
            query = query.filter(product::Column::CategoryId.eq(category_id));
        }

        query = match filter.sort {
            ProductSort::Name => query.order_by_asc(product::Column::Name),
            ProductSort::Price => query.order_by_asc(product::Column::Price),
            ProductSort::Newest => query.order_by_desc(product::Column::CreatedAt),
        };

        let page = filter.page.max(1);
        let paginator = query.paginate(&self.db, PRODUCTS_PER_PAGE);

        let totals = paginator
            .num_items_and_pages()
            .await
            .map_err(|e| InternalError::database("count_products", e))?;

        let products = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| InternalError::database("list_products", e))?;

        let products = self.attach_categories(products).await?;

        Ok(ProductPage {
            products,
            total: totals.number_of_items,
            page,
            pages: totals.number_of_pages,
            per_page: PRODUCTS_PER_PAGE,
        })
    }

    /// Look up a single product with its category
    pub async fn get_product(
        &self,
        id: i32,
    ) -> Result<Option<(product::Model, Option<category::Model>)>, InternalError> {
        product::Entity::find_by_id(id)
            .find_also_related(category::Entity)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_product", e))
    }

    /// Resolve a set of product ids
    ///
    /// Unknown ids are simply absent from the result. Order is the database
    /// query order (ascending id), stable for a given input set.
    pub async fn get_products_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<Vec<product::Model>, InternalError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        product::Entity::find()
            .filter(product::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("get_products_by_ids", e))
    }

    /// Categories that currently have at least one product, with counts
    pub async fn categories_with_counts(&self) -> Result<Vec<CategoryWithCount>, InternalError> {
        category::Entity::find()
            .select_only()
            .column(category::Column::Id)
            .column(category::Column::Name)
            .column_as(product::Column::Id.count(), "product_count")
            .join(JoinType::InnerJoin, category::Relation::Product.def())
            .group_by(category::Column::Id)
            .group_by(category::Column::Name)
            .order_by_asc(category::Column::Name)
            .into_model::<CategoryWithCount>()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("categories_with_counts", e))
    }

    /// All available products in name order (batch selection listing)
    pub async fn available_products(&self) -> Result<Vec<product::Model>, InternalError> {
        product::Entity::find()
            .filter(product::Column::Available.eq(true))
            .order_by_asc(product::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("available_products", e))
    }

    /// Search suggestions: product names plus matching categories
    ///
    /// Queries shorter than two characters yield nothing. At most 5 product
    /// names, 3 categories (rendered as `Category: <name>`), 8 total.
    pub async fn search_suggestions(&self, query: &str) -> Result<Vec<String>, InternalError> {
        let query = query.trim();
        if query.chars().count() < 2 {
            return Ok(Vec::new());
        }

        let mut suggestions: Vec<String> = product::Entity::find()
            .filter(
                Condition::any()
                    .add(product::Column::Name.contains(query))
                    .add(product::Column::Description.contains(query)),
            )
            .select_only()
            .column(product::Column::Name)
            .limit(5)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("suggest_products", e))?;

        let categories: Vec<String> = category::Entity::find()
            .filter(category::Column::Name.contains(query))
            .select_only()
            .column(category::Column::Name)
            .limit(3)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("suggest_categories", e))?;

        suggestions.extend(categories.into_iter().map(|name| format!("Category: {}", name)));
        suggestions.truncate(8);

        Ok(suggestions)
    }

    /// Zip products with their category rows via a second lookup
    async fn attach_categories(
        &self,
        products: Vec<product::Model>,
    ) -> Result<Vec<(product::Model, Option<category::Model>)>, InternalError> {
        let mut category_ids: Vec<i32> = products.iter().filter_map(|p| p.category_id).collect();
        category_ids.sort_unstable();
        category_ids.dedup();

        let categories: HashMap<i32, category::Model> = if category_ids.is_empty() {
            HashMap::new()
        } else {
            category::Entity::find()
                .filter(category::Column::Id.is_in(category_ids))
                .all(&self.db)
                .await
                .map_err(|e| InternalError::database("load_categories", e))?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        };

        Ok(products
            .into_iter()
            .map(|p| {
                let cat = p.category_id.and_then(|id| categories.get(&id).cloned());
                (p, cat)
            })
            .collect())
    }
}
