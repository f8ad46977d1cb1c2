/**
 * Server Initialization
 *
 * Builds the application router from configuration. The database must be
 * reachable; the session revocation list is pruned in the background so it
 * only ever holds tokens that could still be presented.
 */

use std::time::Duration;

use axum::Router;
use thiserror::Error;

use crate::backend::auth::sessions::SessionError;
use crate::backend::db::DataError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, seed_admin};
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Startup failures
#[derive(Debug, Error)]
pub enum InitError {
    #[error("database unavailable: {0}")]
    Database(#[from] sqlx::Error),
    #[error("admin seeding failed: {0}")]
    Seed(#[from] DataError),
    #[error("session setup failed: {0}")]
    Sessions(#[from] SessionError),
}

/// Create and configure the Axum application
///
/// # Initialization Steps
///
/// 1. **Load Database**: connect and migrate
/// 2. **Seed Admin**: provision `ADMIN_USERNAME` if configured
/// 3. **Create State**: pool and session manager
/// 4. **Spawn Pruning**: drop expired revocations once per session lifetime
/// 5. **Create Router**
pub async fn create_app(config: AppConfig) -> Result<Router<()>, InitError> {
    tracing::info!("Initializing quote server");

    let pool = load_database(&config).await?;

    if let Some(seed) = &config.admin_seed {
        seed_admin(&pool, seed).await?;
    }

    let app_state = AppState::new(pool, &config)?;

    let sessions = app_state.sessions.clone();
    let period = sessions.ttl().to_std().unwrap_or(Duration::from_secs(300));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            let pruned = sessions.prune_revoked(chrono::Utc::now()).await;
            if pruned > 0 {
                tracing::debug!(pruned, "Pruned expired session revocations");
            }
        }
    });

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
