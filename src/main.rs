use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;
use sea_orm::Database;

use catalog_backend::api::{HealthApi, ProductsApi, QrApi, SearchApi};
use catalog_backend::config::{init_logging, BootstrapSettings};
use catalog_backend::AppData;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let settings = BootstrapSettings::from_env();

    let db = Database::connect(settings.database_url())
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database: {}", settings.database_url());

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    tracing::info!("Database migrations completed");

    let app_data = Arc::new(AppData::init(db, settings.clone()));

    let api_service = OpenApiService::new(
        (
            HealthApi,
            ProductsApi::new(app_data.clone()),
            SearchApi::new(app_data.clone()),
            QrApi::new(app_data.clone()),
        ),
        "Catalog API",
        "0.1.0",
    )
    .server(settings.public_base_url());

    // Generate Swagger UI from OpenAPI service
    let ui = api_service.swagger_ui();

    // Compose routes: nest API service under /api and Swagger UI under /swagger
    let app = Route::new().nest("/api", api_service).nest("/swagger", ui);

    let bind_address = settings.bind_address();
    tracing::info!("Starting server on http://{}", bind_address);
    tracing::info!("Swagger UI available at /swagger");

    Server::new(TcpListener::bind(bind_address)).run(app).await
}
