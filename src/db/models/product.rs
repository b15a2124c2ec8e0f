//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Variant entity — a purchasable sub-option of a product
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Variant {
    pub id: i64,
    pub product_id: i64,
    pub name: String,
    pub sku: String,
    /// Zero means "not explicitly priced"; display falls back to the product price
    pub price: Decimal,
}
