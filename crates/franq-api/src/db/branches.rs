//! Branch persistence operations.
//!
//! All functions take a `&SqlitePool` and operate on the `branch` table.
//! `franchise_id` is never pre-validated here; a dangling reference
//! surfaces as a foreign key violation from the engine.

use franq_core::Branch;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, address, franchise_id";

/// Insert a new branch and return it with the generated id.
pub async fn insert(
    pool: &SqlitePool,
    name: &str,
    address: &str,
    franchise_id: i64,
) -> Result<Branch, sqlx::Error> {
    sqlx::query_as::<_, Branch>(
        "INSERT INTO branch (name, address, franchise_id) VALUES (?1, ?2, ?3)
         RETURNING id, name, address, franchise_id",
    )
    .bind(name)
    .bind(address)
    .bind(franchise_id)
    .fetch_one(pool)
    .await
}

/// List all branches.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Branch>, sqlx::Error> {
    sqlx::query_as::<_, Branch>(&format!("SELECT {COLUMNS} FROM branch"))
        .fetch_all(pool)
        .await
}

/// Fetch a branch by id.
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Branch>, sqlx::Error> {
    sqlx::query_as::<_, Branch>(&format!("SELECT {COLUMNS} FROM branch WHERE id = ?1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Fetch a branch by exact name.
pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Branch>, sqlx::Error> {
    sqlx::query_as::<_, Branch>(&format!("SELECT {COLUMNS} FROM branch WHERE name = ?1"))
        .bind(name)
        .fetch_optional(pool)
        .await
}

/// Overwrite the mutable fields of a branch. Returns the updated row,
/// or `None` if the id is unknown.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    name: &str,
    address: &str,
    franchise_id: i64,
) -> Result<Option<Branch>, sqlx::Error> {
    sqlx::query_as::<_, Branch>(
        "UPDATE branch SET name = ?1, address = ?2, franchise_id = ?3 WHERE id = ?4
         RETURNING id, name, address, franchise_id",
    )
    .bind(name)
    .bind(address)
    .bind(franchise_id)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a branch. Returns whether a row was removed.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM branch WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
