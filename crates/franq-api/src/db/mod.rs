//! # Persistence Layer
//!
//! One module per table (`franchises`, `branches`, `products`), each a set
//! of free functions over a `&SqlitePool`, plus pool construction and
//! schema migration here.
//!
//! The uniqueness invariant on entity names is enforced by unique indexes
//! (see [`schema`]); the foreign keys `branch.franchise_id` and
//! `product.branch_id` are enforced by SQLite with cascading deletes.

pub mod branches;
pub mod franchises;
pub mod products;
pub mod schema;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;

/// Default maximum connections in the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open a connection pool and bring the schema up to date.
///
/// `sqlite::memory:` URLs get a single-connection pool — every connection
/// to `:memory:` opens a distinct database, so a larger pool would scatter
/// the tables across invisible siblings.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let in_memory = database_url.contains(":memory:");

    let options = SqliteConnectOptions::from_str(database_url)?
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true)
        .create_if_missing(true);

    let max_connections = if in_memory { 1 } else { DEFAULT_MAX_CONNECTIONS };
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    schema::migrate(&pool).await?;
    Ok(pool)
}

/// In-memory pool with the schema applied, for tests.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    init_pool("sqlite::memory:")
        .await
        .expect("in-memory pool should open")
}
