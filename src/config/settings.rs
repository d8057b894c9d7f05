use std::env;

/// Default page size for product listings
pub const PRODUCTS_PER_PAGE: u64 = 20;

/// Bootstrap settings for infrastructure configuration
///
/// Loaded once at startup from environment variables (with `.env` support
/// via dotenv in main). Everything has a development-friendly default.
#[derive(Debug, Clone)]
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
    public_base_url: String,
    qr_batch_limit: usize,
}

impl BootstrapSettings {
    /// Load bootstrap settings from environment variables
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://catalog.db?mode=rwc".to_string());

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let server_port = env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| "http://localhost:3000/api".to_string());

        let qr_batch_limit = env::var("QR_BATCH_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        Self {
            database_url,
            server_host,
            server_port,
            public_base_url,
            qr_batch_limit,
        }
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// External base URL used when building canonical product links
    pub fn public_base_url(&self) -> &str {
        &self.public_base_url
    }

    /// Maximum number of ids accepted by a single batch QR request
    pub fn qr_batch_limit(&self) -> usize {
        self.qr_batch_limit
    }
}
