//! Catalog API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::db::models::Variant;
use crate::db::repository::{ProductRecord, ProductRepository};
use crate::state::AppState;
use crate::utils::{AppError, AppResult};

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

/// Query params for the product listing
///
/// Raw strings on purpose: an unparsable `offset`/`limit` falls back to its
/// default instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub offset: Option<String>,
    pub limit: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "priceLessThan")]
    pub price_less_than: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CatalogListResponse {
    pub products: Vec<ProductResponse>,
    pub total: i64,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub code: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: CategoryRef,
    /// Present at detail granularity only; list payloads omit variants
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<VariantResponse>>,
}

#[derive(Debug, Serialize)]
pub struct CategoryRef {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct VariantResponse {
    pub name: String,
    pub sku: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl ProductResponse {
    /// List-granularity shape
    fn summary(record: ProductRecord) -> Self {
        Self {
            code: record.code,
            price: record.price,
            category: CategoryRef {
                code: record.category_code,
                name: record.category_name,
            },
            variants: None,
        }
    }

    /// Detail shape with variants and the price fallback applied
    fn detail(record: ProductRecord) -> Self {
        let variants = record
            .variants
            .iter()
            .map(|v| VariantResponse {
                name: v.name.clone(),
                sku: v.sku.clone(),
                price: display_price(v, record.price),
            })
            .collect();
        Self {
            variants: Some(variants),
            ..Self::summary(record)
        }
    }
}

/// A variant whose stored price is zero inherits the owning product's price.
fn display_price(variant: &Variant, product_price: Decimal) -> Decimal {
    if variant.price.is_zero() {
        product_price
    } else {
        variant.price
    }
}

fn parse_offset(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.parse::<i64>().ok()).unwrap_or(0).max(0)
}

fn parse_limit(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(DEFAULT_LIMIT)
        .clamp(1, MAX_LIMIT)
}

/// An unparsable price filter rejects the whole request; empty counts as absent.
fn parse_price_filter(raw: Option<&str>) -> Result<Option<Decimal>, AppError> {
    match raw {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<Decimal>()
            .map(Some)
            .map_err(|_| AppError::Validation("invalid priceLessThan".to_string())),
    }
}

/// GET /catalog - list products with filters and pagination
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> AppResult<Json<CatalogListResponse>> {
    let offset = parse_offset(query.offset.as_deref());
    let limit = parse_limit(query.limit.as_deref());
    let category = query.category.unwrap_or_default();
    let price_less_than = parse_price_filter(query.price_less_than.as_deref())?;

    let repo = ProductRepository::new(state.pool.clone());
    let (products, total) = repo.list(offset, limit, &category, price_less_than).await?;

    Ok(Json(CatalogListResponse {
        products: products.into_iter().map(ProductResponse::summary).collect(),
        total,
    }))
}

/// GET /catalog/{code} - single product with variants
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<ProductResponse>> {
    let repo = ProductRepository::new(state.pool.clone());
    let record = repo.get_by_code(&code).await?;
    Ok(Json(ProductResponse::detail(record)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(variants: Vec<Variant>) -> ProductRecord {
        ProductRecord {
            code: "PROD001".to_string(),
            price: Decimal::new(1050, 2),
            category_code: "CLOTHING".to_string(),
            category_name: "Clothing".to_string(),
            variants,
        }
    }

    #[test]
    fn test_parse_offset() {
        assert_eq!(parse_offset(None), 0);
        assert_eq!(parse_offset(Some("")), 0);
        assert_eq!(parse_offset(Some("abc")), 0);
        assert_eq!(parse_offset(Some("-5")), 0);
        assert_eq!(parse_offset(Some("7")), 7);
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(None), 10);
        assert_eq!(parse_limit(Some("abc")), 10);
        assert_eq!(parse_limit(Some("0")), 1);
        assert_eq!(parse_limit(Some("-3")), 1);
        assert_eq!(parse_limit(Some("500")), 100);
        assert_eq!(parse_limit(Some("42")), 42);
    }

    #[test]
    fn test_parse_price_filter() {
        assert_eq!(parse_price_filter(None).unwrap(), None);
        assert_eq!(parse_price_filter(Some("")).unwrap(), None);
        assert_eq!(
            parse_price_filter(Some("20.5")).unwrap(),
            Some(Decimal::new(205, 1))
        );
        assert!(matches!(
            parse_price_filter(Some("abc")),
            Err(AppError::Validation(msg)) if msg == "invalid priceLessThan"
        ));
    }

    #[test]
    fn test_display_price_fallback() {
        let product_price = Decimal::new(1050, 2);
        let unpriced = Variant {
            id: 1,
            product_id: 1,
            name: "Variant A".to_string(),
            sku: "SKU001".to_string(),
            price: Decimal::ZERO,
        };
        let priced = Variant {
            price: Decimal::new(999, 2),
            ..unpriced.clone()
        };
        assert_eq!(display_price(&unpriced, product_price), product_price);
        assert_eq!(display_price(&priced, product_price), Decimal::new(999, 2));
    }

    #[test]
    fn test_summary_omits_variants() {
        let resp = ProductResponse::summary(record(vec![Variant {
            id: 1,
            product_id: 1,
            name: "Variant A".to_string(),
            sku: "SKU001".to_string(),
            price: Decimal::ZERO,
        }]));
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("variants").is_none());
        assert_eq!(json["price"], serde_json::json!(10.5));
        assert_eq!(json["category"]["code"], "CLOTHING");
    }

    #[test]
    fn test_detail_applies_fallback() {
        let resp = ProductResponse::detail(record(vec![
            Variant {
                id: 1,
                product_id: 1,
                name: "Variant A".to_string(),
                sku: "SKU001".to_string(),
                price: Decimal::ZERO,
            },
            Variant {
                id: 2,
                product_id: 1,
                name: "Variant B".to_string(),
                sku: "SKU002".to_string(),
                price: Decimal::new(999, 2),
            },
        ]));
        let json = serde_json::to_value(&resp).unwrap();
        let variants = json["variants"].as_array().unwrap();
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0]["price"], serde_json::json!(10.5));
        assert_eq!(variants[1]["price"], serde_json::json!(9.99));
    }
}
