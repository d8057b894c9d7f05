pub mod database;
pub mod qr;

pub use database::DatabaseError;
pub use qr::QrError;

use thiserror::Error;

/// Internal error type shared across stores and services
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Qr(#[from] QrError),
}

impl InternalError {
    /// Shorthand for wrapping a failed database operation
    pub fn database(operation: impl Into<String>, source: sea_orm::DbErr) -> Self {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.into(),
            source,
        })
    }
}
