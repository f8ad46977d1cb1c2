/**
 * Application State Management
 *
 * `AppState` is cloned into every handler. The pool and the session manager
 * are both cheap handles to shared resources, and `FromRef` lets handlers
 * extract only the part they use. Configuration is consumed here and not
 * kept around.
 *
 * The flash signing key is generated per process. Flash messages only live
 * across one redirect, so the ones pending at a restart are dropped.
 */

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sqlx::PgPool;

use crate::backend::auth::sessions::{SessionError, SessionManager};
use crate::shared::AppConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool; each data access call draws from it
    pub pool: PgPool,

    /// Session token issuing, checking and revocation
    pub sessions: SessionManager,

    /// Signs the flash cookie
    pub flash_key: Key,
}

impl AppState {
    pub fn new(pool: PgPool, config: &AppConfig) -> Result<Self, SessionError> {
        let sessions = SessionManager::new(&config.session_secret, config.session_ttl)?;
        Ok(Self {
            pool,
            sessions,
            flash_key: Key::generate(),
        })
    }
}

impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

impl FromRef<AppState> for SessionManager {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.flash_key.clone()
    }
}
