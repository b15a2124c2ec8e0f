//! Repository Module
//!
//! PostgreSQL-backed query operations for the catalog tables. Each repository
//! owns a handle to the shared connection pool; there is no ambient singleton.

pub mod category;
pub mod product;

pub use category::CategoryRepository;
pub use product::{ProductRecord, ProductRepository};

use thiserror::Error;

use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Result alias for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// True when the error is a PostgreSQL unique-constraint violation (SQLSTATE 23505).
fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_error_maps_to_app_error() {
        let err: AppError = RepoError::NotFound("product not found".into()).into();
        assert!(matches!(err, AppError::NotFound(msg) if msg == "product not found"));

        let err: AppError = RepoError::Duplicate("category code already exists".into()).into();
        assert!(matches!(err, AppError::Conflict(_)));

        let err: AppError = RepoError::Database("connection reset".into()).into();
        assert!(matches!(err, AppError::Database(msg) if msg == "connection reset"));
    }

    #[test]
    fn test_repo_error_display() {
        let err = RepoError::Duplicate("category code already exists".into());
        assert_eq!(format!("{err}"), "Duplicate: category code already exists");
    }
}
