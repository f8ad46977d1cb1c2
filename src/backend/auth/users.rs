/**
 * User Model and Database Operations
 *
 * Admin accounts. Password checks run inside Postgres: the stored bcrypt
 * hash is compared with pgcrypto's `crypt()`, and this module only relays
 * whether a matching row exists.
 */

use sqlx::PgPool;

use crate::backend::db::DataResult;

/// Admin user as stored in the `users` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Generated id
    pub id: i64,
    /// Unique login name
    pub username: String,
    /// bcrypt hash in `$2a$` form, which pgcrypto understands
    pub password_hash: String,
}

/// Create a user with a bcrypt-hashed password
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - Login name (must be unused)
/// * `password` - Plaintext password, hashed before it leaves this function
///
/// # Returns
/// Created user or error (`UniqueViolation` when the name is taken)
pub async fn create_user(pool: &PgPool, username: &str, password: &str) -> DataResult<User> {
    let password_hash = hash_password(password)?;

    let mut tx = pool.begin().await?;
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, password_hash)
        VALUES ($1, $2)
        RETURNING id, username, password_hash
        "#,
    )
    .bind(username)
    .bind(&password_hash)
    .fetch_one(&mut *tx)
    .await?;
    tx.commit().await?;

    Ok(user)
}

/// Whether an account with this username exists
pub async fn user_exists(pool: &PgPool, username: &str) -> DataResult<bool> {
    let mut tx = pool.begin().await?;
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM users WHERE username = $1)",
    )
    .bind(username)
    .fetch_one(&mut *tx)
    .await?;
    tx.commit().await?;

    Ok(exists)
}

/// Check a username/password pair against the stored hash
///
/// # Returns
/// The user id when the pair matches, `None` for an unknown user or a wrong
/// password (the two are not distinguished)
pub async fn verify_password(pool: &PgPool, username: &str, password: &str) -> DataResult<Option<i64>> {
    let mut tx = pool.begin().await?;
    let id = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT id
        FROM users
        WHERE username = $1
          AND password_hash = crypt($2, password_hash)
        "#,
    )
    .bind(username)
    .bind(password)
    .fetch_optional(&mut *tx)
    .await?;
    tx.commit().await?;

    Ok(id)
}

/// Create the user unless it already exists
///
/// # Returns
/// `true` when a new account was created
pub async fn ensure_user(pool: &PgPool, username: &str, password: &str) -> DataResult<bool> {
    if user_exists(pool, username).await? {
        return Ok(false);
    }
    create_user(pool, username, password).await?;
    Ok(true)
}

/// bcrypt hash in the `$2a$` variant
fn hash_password(password: &str) -> DataResult<String> {
    let parts = bcrypt::hash_with_result(password, bcrypt::DEFAULT_COST)?;
    Ok(parts.format_for_version(bcrypt::Version::TwoA))
}
