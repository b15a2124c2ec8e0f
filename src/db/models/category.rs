//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
///
/// `code` is the identity key for external reference; `id` is internal.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub code: String,
    pub name: String,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
}
