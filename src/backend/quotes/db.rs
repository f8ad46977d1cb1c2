//! Database operations for quotes
//!
//! Each function runs in its own transaction; see `backend::db`.

use rand::Rng;
use sqlx::PgPool;

use crate::backend::db::{begin_snapshot, DataError, DataResult};
use crate::shared::Quote;

/// All quotes, ordered by id
pub async fn select_all(pool: &PgPool) -> DataResult<Vec<Quote>> {
    let mut tx = pool.begin().await?;

    let quotes = sqlx::query_as::<_, Quote>(
        r#"
        SELECT id, body, source
        FROM quote
        ORDER BY id
        "#,
    )
    .fetch_all(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(quotes)
}

/// Get a quote by id
pub async fn select_by_id(pool: &PgPool, id: i64) -> DataResult<Option<Quote>> {
    let mut tx = pool.begin().await?;

    let quote = sqlx::query_as::<_, Quote>(
        r#"
        SELECT id, body, source
        FROM quote
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(quote)
}

/// Insert a quote and return it with its generated id
pub async fn insert_one(pool: &PgPool, body: &str, source: &str) -> DataResult<Quote> {
    let mut tx = pool.begin().await?;

    let quote = sqlx::query_as::<_, Quote>(
        r#"
        INSERT INTO quote (body, source)
        VALUES ($1, $2)
        RETURNING id, body, source
        "#,
    )
    .bind(body)
    .bind(source)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    tracing::debug!(quote_id = quote.id, "inserted quote");
    Ok(quote)
}

/// Overwrite body and source of an existing quote
///
/// Last write wins; there is no version check.
pub async fn update_one(pool: &PgPool, id: i64, body: &str, source: &str) -> DataResult<Quote> {
    let mut tx = pool.begin().await?;

    let quote = sqlx::query_as::<_, Quote>(
        r#"
        UPDATE quote
        SET body = $1, source = $2
        WHERE id = $3
        RETURNING id, body, source
        "#,
    )
    .bind(body)
    .bind(source)
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| DataError::not_found("quote", id))?;

    tx.commit().await?;
    Ok(quote)
}

/// Delete a quote; its quote_tag rows go with it (ON DELETE CASCADE)
pub async fn delete_one(pool: &PgPool, id: i64) -> DataResult<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        DELETE FROM quote
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DataError::not_found("quote", id));
    }

    tx.commit().await?;
    Ok(())
}

/// One quote chosen uniformly at random, or `None` when the table is empty
///
/// Counts the rows, draws an offset in `0..count` and reads the row at that
/// offset. Both reads share one snapshot, so a concurrent delete cannot push
/// the offset past the end. Linear in the table size.
pub async fn select_random(pool: &PgPool) -> DataResult<Option<Quote>> {
    let mut tx = begin_snapshot(pool).await?;

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(id) FROM quote")
        .fetch_one(&mut *tx)
        .await
        .inspect_err(|e| tracing::error!(err = ?e, "an error occurred when counting quotes"))?;

    let offset = random_offset(count, &mut rand::rng());
    let quote = match offset {
        Some(offset) => {
            sqlx::query_as::<_, Quote>(
                r#"
                SELECT id, body, source
                FROM quote
                ORDER BY id
                OFFSET $1
                LIMIT 1
                "#,
            )
            .bind(offset)
            .fetch_optional(&mut *tx)
            .await
            .inspect_err(|e| tracing::error!(err = ?e, offset, "an error occurred when fetching random quote"))?
        }
        None => None,
    };

    tx.commit().await?;
    Ok(quote)
}

/// Uniform offset into a table of `count` rows
pub fn random_offset<R: Rng + ?Sized>(count: i64, rng: &mut R) -> Option<i64> {
    if count <= 0 {
        None
    } else {
        Some(rng.random_range(0..count))
    }
}
