/**
 * Database Configuration
 *
 * Creates the connection pool from `AppConfig`, applies migrations and
 * provisions the admin account. Unlike optional services, the database is
 * required: any failure here stops startup.
 */

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::backend::auth::users::ensure_user;
use crate::backend::db::DataResult;
use crate::shared::{AdminSeed, AppConfig};

/// Connect the pool and bring the schema up to date
pub async fn load_database(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!(max_connections = config.max_connections, "Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .inspect_err(|e| tracing::error!("Failed to create database connection pool: {:?}", e))?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!()
        .run(&pool)
        .await
        .inspect_err(|e| tracing::error!("Failed to run database migrations: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

/// Create the configured admin account when it does not exist yet
pub async fn seed_admin(pool: &PgPool, seed: &AdminSeed) -> DataResult<()> {
    if ensure_user(pool, &seed.username, &seed.password).await? {
        tracing::info!(username = %seed.username, "Created admin account");
    } else {
        tracing::debug!(username = %seed.username, "Admin account already present");
    }
    Ok(())
}
