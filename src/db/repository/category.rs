//! Category Repository

use sqlx::PgPool;

use super::{RepoError, RepoResult, is_unique_violation};
use crate::db::models::{Category, CategoryCreate};

#[derive(Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find all categories
    pub async fn find_all(&self) -> RepoResult<Vec<Category>> {
        let categories: Vec<Category> =
            sqlx::query_as("SELECT id, code, name FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(categories)
    }

    /// Create a new category
    ///
    /// A unique violation on `categories.code` surfaces as [`RepoError::Duplicate`]
    /// so callers can distinguish it from other persistence failures.
    pub async fn create(&self, data: &CategoryCreate) -> RepoResult<Category> {
        let created: Category =
            sqlx::query_as("INSERT INTO categories (code, name) VALUES ($1, $2) RETURNING id, code, name")
                .bind(&data.code)
                .bind(&data.name)
                .fetch_one(&self.pool)
                .await
                .map_err(|err| {
                    if is_unique_violation(&err) {
                        RepoError::Duplicate("category code already exists".to_string())
                    } else {
                        RepoError::from(err)
                    }
                })?;
        Ok(created)
    }
}
