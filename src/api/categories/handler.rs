//! Categories API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Serialize;

use crate::db::models::CategoryCreate;
use crate::db::repository::CategoryRepository;
use crate::state::AppState;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub code: String,
    pub name: String,
}

/// GET /categories - list all categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CategoryResponse>>> {
    let repo = CategoryRepository::new(state.pool.clone());
    let categories = repo.find_all().await?;
    Ok(Json(
        categories
            .into_iter()
            .map(|c| CategoryResponse {
                code: c.code,
                name: c.name,
            })
            .collect(),
    ))
}

/// POST /categories - create a category
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CategoryCreate>, JsonRejection>,
) -> AppResult<Json<CategoryResponse>> {
    let Json(data) = body.map_err(|_| AppError::Invalid("invalid body".to_string()))?;
    validate(&data)?;

    let repo = CategoryRepository::new(state.pool.clone());
    let created = repo.create(&data).await?;

    Ok(Json(CategoryResponse {
        code: created.code,
        name: created.name,
    }))
}

/// `code` is checked before `name`; the first failing field wins.
fn validate(data: &CategoryCreate) -> Result<(), AppError> {
    if data.code.trim().is_empty() {
        return Err(AppError::Validation("code is required".to_string()));
    }
    if data.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }
    Ok(())
}
