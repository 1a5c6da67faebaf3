//! Versioned schema migrations.
//!
//! Applied migrations are tracked in a `_migrations` table and each version
//! runs at most once, so the binary can be pointed at an existing database
//! file safely.

use sqlx::SqlitePool;

/// Current schema version.
pub const CURRENT_VERSION: i64 = 1;

const CREATE_MIGRATIONS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS _migrations (
        version INTEGER PRIMARY KEY NOT NULL,
        applied_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    );
"#;

/// Migration 1: the three entity tables.
///
/// Unique indexes on the `name` columns are the authoritative uniqueness
/// check for creates; the services' find-by-name pre-checks only improve
/// the error message. Deleting a parent cascades to its children, matching
/// the ownership semantics of the aggregate views.
const MIGRATION_V1: &str = r#"
    CREATE TABLE IF NOT EXISTS franchise (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    );

    CREATE UNIQUE INDEX IF NOT EXISTS idx_franchise_name ON franchise(name);

    CREATE TABLE IF NOT EXISTS branch (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        address TEXT NOT NULL,
        franchise_id INTEGER NOT NULL REFERENCES franchise(id) ON DELETE CASCADE
    );

    CREATE UNIQUE INDEX IF NOT EXISTS idx_branch_name ON branch(name);
    CREATE INDEX IF NOT EXISTS idx_branch_franchise_id ON branch(franchise_id);

    CREATE TABLE IF NOT EXISTS product (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT,
        stock INTEGER NOT NULL CHECK (stock >= 0),
        sku INTEGER NOT NULL,
        branch_id INTEGER NOT NULL REFERENCES branch(id) ON DELETE CASCADE
    );

    CREATE UNIQUE INDEX IF NOT EXISTS idx_product_name ON product(name);
    CREATE INDEX IF NOT EXISTS idx_product_branch_id ON product(branch_id);
"#;

/// Bring the schema up to [`CURRENT_VERSION`].
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(CREATE_MIGRATIONS_TABLE).execute(pool).await?;

    let applied = applied_version(pool).await?;
    for (version, sql) in [(1_i64, MIGRATION_V1)] {
        if version > applied {
            sqlx::raw_sql(sql).execute(pool).await?;
            sqlx::query("INSERT INTO _migrations (version) VALUES (?1)")
                .bind(version)
                .execute(pool)
                .await?;
            tracing::info!(version, "applied schema migration");
        }
    }
    Ok(())
}

/// Highest applied migration version, 0 for a fresh database.
pub async fn applied_version(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let (version,): (Option<i64>,) = sqlx::query_as("SELECT MAX(version) FROM _migrations")
        .fetch_one(pool)
        .await?;
    Ok(version.unwrap_or(0))
}
