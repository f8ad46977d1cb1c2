//! Database test fixtures and utilities
//!
//! Tests that need Postgres read `DATABASE_URL`. When it is unset the
//! fixture returns `None` and the test returns early, so the suite still
//! passes on machines without a database.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connection URL for database tests, if configured
pub fn database_url() -> Option<String> {
    std::env::var("DATABASE_URL").ok()
}

/// Run database migrations for testing
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Remove all rows while preserving the schema; ids restart at 1
pub async fn cleanup_test_data(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("TRUNCATE TABLE quote_tag, quote, tag, users RESTART IDENTITY CASCADE")
        .execute(pool)
        .await?;
    Ok(())
}

/// A pool that never connects until used, for tests that must not touch
/// the database
pub fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy("postgres://nobody@127.0.0.1:1/unreachable")
        .expect("Failed to create lazy pool")
}

/// Test database fixture
///
/// Migrated and emptied on creation. Tests using it run under
/// `#[serial]` because they share one database.
pub struct TestDatabase {
    pool: PgPool,
    url: String,
}

impl TestDatabase {
    /// Connect, migrate and clean, or `None` when `DATABASE_URL` is unset
    pub async fn try_new() -> Option<Self> {
        let Some(url) = database_url() else {
            eprintln!("DATABASE_URL not set; skipping database test");
            return None;
        };

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await
            .expect("Failed to create test database pool");
        run_migrations(&pool).await.expect("Failed to run migrations");
        cleanup_test_data(&pool).await.expect("Failed to clean test data");

        Some(Self { pool, url })
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
