//! Data Access Layer
//!
//! Shared pieces of the data access layer. The per-table operations live
//! next to their handlers (`quotes::db`, `tags::db`, `quote_tags::db`,
//! `public::db`, `auth::users`); this module holds what they have in common.
//!
//! # Transactions
//!
//! Every operation checks a connection out of the pool, begins a
//! transaction, runs its statements and commits. An early return through `?`
//! drops the open `sqlx::Transaction`, which rolls it back. No transaction
//! spans more than one operation. Operations that read the same table more
//! than once use [`begin_snapshot`] so every statement sees the same rows.
//!
//! # Errors
//!
//! Operations return [`DataResult`]. Failures are values tagged with a
//! [`DataErrorKind`]; nothing in this layer panics or unwinds into the
//! handlers.

/// Tagged data access errors
pub mod error;

/// Table metadata (column names)
pub mod schema;

pub use error::{DataError, DataErrorKind, DataResult};

use sqlx::{PgPool, Postgres, Transaction};

/// Begin a REPEATABLE READ transaction
///
/// All statements in it read from the snapshot taken by the first one, so
/// commits from other connections in between are not visible.
pub async fn begin_snapshot(pool: &PgPool) -> DataResult<Transaction<'static, Postgres>> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
        .execute(&mut *tx)
        .await?;
    Ok(tx)
}
