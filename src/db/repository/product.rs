//! Product Repository

use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::PgPool;

use super::{RepoError, RepoResult};
use crate::db::models::Variant;

/// Product row joined with its owning category.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    code: String,
    price: Decimal,
    category_code: String,
    category_name: String,
}

/// A product with category detail and variants resolved.
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub code: String,
    pub price: Decimal,
    pub category_code: String,
    pub category_name: String,
    pub variants: Vec<Variant>,
}

#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List products matching the filters, along with the count of all matching rows.
    ///
    /// An empty `category` means no category restriction; `price_less_than` is a
    /// strict upper bound when present. Both predicates AND together and are shared
    /// verbatim by the count and the page, which run in one transaction. Rows come
    /// back in ascending product id so pagination is stable across calls.
    pub async fn list(
        &self,
        offset: i64,
        limit: i64,
        category: &str,
        price_less_than: Option<Decimal>,
    ) -> RepoResult<(Vec<ProductRecord>, i64)> {
        let mut tx = self.pool.begin().await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM products p
            JOIN categories c ON c.id = p.category_id
            WHERE ($1 = '' OR c.code = $1)
              AND ($2::numeric IS NULL OR p.price < $2::numeric)
            "#,
        )
        .bind(category)
        .bind(price_less_than)
        .fetch_one(&mut *tx)
        .await?;

        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT p.id, p.code, p.price, c.code AS category_code, c.name AS category_name
            FROM products p
            JOIN categories c ON c.id = p.category_id
            WHERE ($1 = '' OR c.code = $1)
              AND ($2::numeric IS NULL OR p.price < $2::numeric)
            ORDER BY p.id
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(category)
        .bind(price_less_than)
        .bind(offset)
        .bind(limit)
        .fetch_all(&mut *tx)
        .await?;

        let pg_ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let variants: Vec<Variant> = if pg_ids.is_empty() {
            vec![]
        } else {
            sqlx::query_as(
                "SELECT id, product_id, name, sku, price FROM variants WHERE product_id = ANY($1) ORDER BY id",
            )
            .bind(&pg_ids)
            .fetch_all(&mut *tx)
            .await?
        };

        tx.commit().await?;

        let mut variant_map: HashMap<i64, Vec<Variant>> = HashMap::new();
        for v in variants {
            variant_map.entry(v.product_id).or_default().push(v);
        }

        let records = rows
            .into_iter()
            .map(|r| ProductRecord {
                variants: variant_map.remove(&r.id).unwrap_or_default(),
                code: r.code,
                price: r.price,
                category_code: r.category_code,
                category_name: r.category_name,
            })
            .collect();

        Ok((records, total))
    }

    /// Fetch a product by its code, with category detail and variants resolved.
    pub async fn get_by_code(&self, code: &str) -> RepoResult<ProductRecord> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            SELECT p.id, p.code, p.price, c.code AS category_code, c.name AS category_name
            FROM products p
            JOIN categories c ON c.id = p.category_id
            WHERE p.code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        let row = row.ok_or_else(|| RepoError::NotFound("product not found".to_string()))?;

        let variants: Vec<Variant> = sqlx::query_as(
            "SELECT id, product_id, name, sku, price FROM variants WHERE product_id = $1 ORDER BY id",
        )
        .bind(row.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ProductRecord {
            code: row.code,
            price: row.price,
            category_code: row.category_code,
            category_name: row.category_name,
            variants,
        })
    }
}
