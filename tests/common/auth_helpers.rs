//! Authentication test helpers
//!
//! Provides utilities for creating test users and session cookies.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use quoteshufl::backend::auth::sessions::{SessionManager, SESSION_COOKIE};
use quoteshufl::backend::auth::users::{create_user, User};
use quoteshufl::backend::server::state::AppState;
use quoteshufl::shared::AppConfig;

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Test user credentials
pub struct TestUser {
    pub user: User,
    pub password: String,
}

/// Create a test user in the database
pub async fn create_test_user(pool: &PgPool, username: &str, password: &str) -> TestUser {
    let user = create_user(pool, username, password)
        .await
        .expect("Failed to create test user");
    TestUser {
        user,
        password: password.to_string(),
    }
}

/// Configuration pointing at `database_url` with the test secret
pub fn test_config(database_url: &str) -> AppConfig {
    AppConfig::builder()
        .database_url(database_url)
        .session_secret(TEST_SECRET)
        .build()
        .expect("Failed to build test config")
}

/// State around an existing pool
pub fn test_state(pool: PgPool, database_url: &str) -> AppState {
    AppState::new(pool, &test_config(database_url)).expect("Failed to build test state")
}

/// `Cookie` header value carrying a session issued at `issued_at`
pub fn session_cookie_at(sessions: &SessionManager, username: &str, issued_at: DateTime<Utc>) -> String {
    let (token, _) = sessions
        .issue(username, issued_at)
        .expect("Failed to issue test session");
    format!("{}={}", SESSION_COOKIE, token)
}

/// `Cookie` header value carrying a session issued now
pub fn session_cookie_now(sessions: &SessionManager, username: &str) -> String {
    session_cookie_at(sessions, username, Utc::now())
}
