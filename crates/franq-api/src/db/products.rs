//! Product persistence operations.
//!
//! All functions take a `&SqlitePool` and operate on the `product` table.
//! This module also owns the one piece of bespoke SQL in the system, the
//! per-branch max-stock projection.

use franq_core::{Product, ProductMaxStock};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, description, stock, sku, branch_id";

/// Insert a new product and return it with the generated id.
pub async fn insert(
    pool: &SqlitePool,
    name: &str,
    description: Option<&str>,
    stock: i64,
    sku: i64,
    branch_id: i64,
) -> Result<Product, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "INSERT INTO product (name, description, stock, sku, branch_id)
         VALUES (?1, ?2, ?3, ?4, ?5)
         RETURNING id, name, description, stock, sku, branch_id",
    )
    .bind(name)
    .bind(description)
    .bind(stock)
    .bind(sku)
    .bind(branch_id)
    .fetch_one(pool)
    .await
}

/// List all products.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(&format!("SELECT {COLUMNS} FROM product"))
        .fetch_all(pool)
        .await
}

/// Fetch a product by id.
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(&format!("SELECT {COLUMNS} FROM product WHERE id = ?1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Fetch a product by exact name.
pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(&format!("SELECT {COLUMNS} FROM product WHERE name = ?1"))
        .bind(name)
        .fetch_optional(pool)
        .await
}

/// Overwrite name, sku, and description. Returns the updated row, or
/// `None` if the id is unknown. Stock has its own operation.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    name: &str,
    sku: i64,
    description: Option<&str>,
) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "UPDATE product SET name = ?1, sku = ?2, description = ?3 WHERE id = ?4
         RETURNING id, name, description, stock, sku, branch_id",
    )
    .bind(name)
    .bind(sku)
    .bind(description)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Overwrite the stock count only. Returns the updated row, or `None` if
/// the id is unknown.
pub async fn update_stock(
    pool: &SqlitePool,
    id: i64,
    stock: i64,
) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "UPDATE product SET stock = ?1 WHERE id = ?2
         RETURNING id, name, description, stock, sku, branch_id",
    )
    .bind(stock)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a product. Returns whether a row was removed.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM product WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// For each branch of the given franchise, the product holding that
/// branch's maximum stock.
///
/// Branches with no products contribute no row. Ties break toward the
/// smallest product id, so exactly one row per non-empty branch comes
/// back. An unknown franchise id yields an empty list.
pub async fn max_stock_per_branch(
    pool: &SqlitePool,
    franchise_id: i64,
) -> Result<Vec<ProductMaxStock>, sqlx::Error> {
    sqlx::query_as::<_, ProductMaxStock>(
        "SELECT
            b.id AS branch_id,
            b.name AS branch_name,
            p.id AS product_id,
            p.name AS product_name,
            p.stock AS stock
         FROM product p
         JOIN branch b ON p.branch_id = b.id
         WHERE b.franchise_id = ?1
           AND p.stock = (
               SELECT MAX(p2.stock)
               FROM product p2
               WHERE p2.branch_id = b.id
           )
           AND p.id = (
               SELECT MIN(p3.id)
               FROM product p3
               WHERE p3.branch_id = b.id
                 AND p3.stock = p.stock
           )
         ORDER BY b.id",
    )
    .bind(franchise_id)
    .fetch_all(pool)
    .await
}
