//! Franchise persistence operations.
//!
//! All functions take a `&SqlitePool` and operate on the `franchise` table.

use franq_core::Franchise;
use sqlx::SqlitePool;

/// Insert a new franchise and return it with the generated id.
pub async fn insert(pool: &SqlitePool, name: &str) -> Result<Franchise, sqlx::Error> {
    sqlx::query_as::<_, Franchise>("INSERT INTO franchise (name) VALUES (?1) RETURNING id, name")
        .bind(name)
        .fetch_one(pool)
        .await
}

/// List all franchises.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Franchise>, sqlx::Error> {
    sqlx::query_as::<_, Franchise>("SELECT id, name FROM franchise")
        .fetch_all(pool)
        .await
}

/// Fetch a franchise by id.
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Franchise>, sqlx::Error> {
    sqlx::query_as::<_, Franchise>("SELECT id, name FROM franchise WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Fetch a franchise by exact name.
pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Franchise>, sqlx::Error> {
    sqlx::query_as::<_, Franchise>("SELECT id, name FROM franchise WHERE name = ?1")
        .bind(name)
        .fetch_optional(pool)
        .await
}

/// Overwrite the mutable fields of a franchise. Returns the updated row,
/// or `None` if the id is unknown.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    name: &str,
) -> Result<Option<Franchise>, sqlx::Error> {
    sqlx::query_as::<_, Franchise>(
        "UPDATE franchise SET name = ?1 WHERE id = ?2 RETURNING id, name",
    )
    .bind(name)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a franchise. Returns whether a row was removed.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM franchise WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
